//! Schemas de validación
//!
//! Un schema es la composición de dos conjuntos declarativos de reglas: el
//! del vehículo base y el propio de cada tipo. `safe_parse` nunca entra en
//! pánico; devuelve el valor tipado o la lista completa de violaciones.
//!
//! La validación ocurre en dos fases:
//! 1. Forma: cada campo declarado existe y tiene el tipo JSON correcto. Los
//!    enteros escritos con punto decimal (`15000.0`) se aceptan como enteros.
//! 2. Restricciones: longitudes y rangos declarados con `validator`.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use super::vehicle::{Vehicle, VEHICLE_FIELDS};
use crate::utils::validation::{
    as_integer, merge_results, required_error, type_error, validate_enum, validate_integer,
    validate_text,
};

/// Tipo JSON esperado para un campo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Entero que cabe en `i32`
    Int,
    /// Entero que cabe en `i64`
    BigInt,
    OneOf(&'static [&'static str]),
}

/// Declaración de un campo del schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    fn check(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        let value = match value {
            None | Some(Value::Null) => return Err(required_error()),
            Some(value) => value,
        };

        match self.kind {
            FieldKind::Text => validate_text(value),
            FieldKind::Int => validate_integer(value, i32::MIN as i64, i32::MAX as i64),
            FieldKind::BigInt => validate_integer(value, i64::MIN, i64::MAX),
            FieldKind::OneOf(options) => validate_enum(value, options),
        }
    }

    /// Reescribe `4.0` como `4` en los campos enteros
    fn normalize(&self, value: &mut Value) {
        if !matches!(self.kind, FieldKind::Int | FieldKind::BigInt) {
            return;
        }
        let integer = match value {
            Value::Number(number) => as_integer(number),
            _ => None,
        };
        if let Some(n) = integer {
            *value = Value::from(n);
        }
    }
}

/// Schema de un tipo de vehículo
///
/// `Validate` del tipo cubre solo sus campos propios; las reglas del vehículo
/// base se añaden en `validate_all`.
pub trait Schema:
    Serialize + DeserializeOwned + Validate + Clone + Send + Sync + 'static
{
    /// Nombre de la colección en el document store
    const COLLECTION: &'static str;

    /// Campos propios del tipo, además de `VEHICLE_FIELDS`
    const FIELDS: &'static [FieldSpec];

    fn vehicle(&self) -> &Vehicle;

    /// Reglas del vehículo base más las del tipo
    fn validate_all(&self) -> Result<(), ValidationErrors> {
        merge_results([self.vehicle().validate(), self.validate()])
    }

    /// Parsea y valida un payload sin lanzar errores
    fn safe_parse(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let Some(object) = payload.as_object() else {
            errors.add("payload", type_error("object", payload));
            return Err(errors);
        };

        for spec in VEHICLE_FIELDS.iter().chain(Self::FIELDS) {
            if let Err(error) = spec.check(object.get(spec.name)) {
                errors.add(spec.name, error);
            }
        }
        if !errors.errors().is_empty() {
            return Err(errors);
        }

        let mut normalized = payload.clone();
        if let Some(object) = normalized.as_object_mut() {
            for spec in VEHICLE_FIELDS.iter().chain(Self::FIELDS) {
                if let Some(value) = object.get_mut(spec.name) {
                    spec.normalize(value);
                }
            }
        }

        let parsed: Self = serde_json::from_value(normalized).map_err(|e| {
            let mut error = ValidationError::new("invalid_payload");
            error.message = Some(e.to_string().into());
            errors.add("payload", error);
            errors
        })?;

        parsed.validate_all()?;
        Ok(parsed)
    }
}
