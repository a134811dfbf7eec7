//! Utilidades de validación
//!
//! Comprobaciones de forma sobre valores JSON crudos, previas a la
//! deserialización tipada. Cada función devuelve un `ValidationError` con
//! los parámetros necesarios para que el cliente entienda el rechazo.

use serde_json::{Number, Value};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Error de campo obligatorio ausente
pub fn required_error() -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some("Required".into());
    error
}

/// Error de tipo JSON inesperado
pub fn type_error(expected: &str, value: &Value) -> ValidationError {
    let mut error = ValidationError::new("invalid_type");
    error.add_param("expected".into(), &expected);
    error.add_param("received".into(), &json_type_name(value));
    error
}

/// Validar que el valor sea texto
pub fn validate_text(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(_) => Ok(()),
        other => Err(type_error("string", other)),
    }
}

/// Entero representado por un número JSON, también cuando viene escrito con
/// punto decimal (`4.0`)
pub fn as_integer(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Validar que el valor sea un entero sin parte fraccionaria dentro de `[min, max]`
/// del tipo destino
pub fn validate_integer(value: &Value, min: i64, max: i64) -> Result<(), ValidationError> {
    let Value::Number(number) = value else {
        return Err(type_error("integer", value));
    };

    match as_integer(number) {
        Some(n) if n >= min && n <= max => Ok(()),
        Some(_) => Err(overflow_error(number)),
        // Enteros por encima de i64::MAX
        None if number.is_u64() => Err(overflow_error(number)),
        None if number.as_f64().is_some_and(|f| f.fract() == 0.0) => Err(overflow_error(number)),
        None => {
            let mut error = ValidationError::new("invalid_type");
            error.add_param("expected".into(), &"integer");
            error.add_param("received".into(), &"float");
            error.add_param("value".into(), number);
            Err(error)
        }
    }
}

fn overflow_error(number: &Number) -> ValidationError {
    let mut error = ValidationError::new("integer_overflow");
    error.add_param("value".into(), number);
    error
}

/// Validar que un valor esté en una lista de valores permitidos
pub fn validate_enum(value: &Value, allowed_values: &[&str]) -> Result<(), ValidationError> {
    let Value::String(text) = value else {
        return Err(type_error("string", value));
    };

    if !allowed_values.contains(&text.as_str()) {
        let mut error = ValidationError::new("invalid_enum_value");
        error.add_param("value".into(), text);
        error.add_param("options".into(), &allowed_values);
        return Err(error);
    }
    Ok(())
}

/// Combina los resultados de varios conjuntos de reglas en una sola lista
/// plana de errores por campo
pub fn merge_results(
    results: impl IntoIterator<Item = Result<(), ValidationErrors>>,
) -> Result<(), ValidationErrors> {
    let mut merged = ValidationErrors::new();

    for result in results {
        let Err(errors) = result else { continue };
        for (field, kind) in errors.into_errors() {
            if let ValidationErrorsKind::Field(list) = kind {
                for error in list {
                    merged.add(field, error);
                }
            }
        }
    }

    if merged.errors().is_empty() {
        Ok(())
    } else {
        Err(merged)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_text() {
        assert!(validate_text(&json!("blue")).is_ok());
        assert!(validate_text(&json!(42)).is_err());
        assert!(validate_text(&Value::Null).is_err());
    }

    #[test]
    fn test_validate_integer() {
        assert!(validate_integer(&json!(15000), i64::MIN, i64::MAX).is_ok());
        assert!(validate_integer(&json!(15000.5), i64::MIN, i64::MAX).is_err());
        assert!(validate_integer(&json!("15000"), i64::MIN, i64::MAX).is_err());
        assert!(validate_integer(&json!(5_000_000_000i64), i32::MIN as i64, i32::MAX as i64).is_err());
    }

    #[test]
    fn test_validate_integer_accepts_integral_floats() {
        assert!(validate_integer(&json!(15000.0), i64::MIN, i64::MAX).is_ok());
        assert!(validate_integer(&json!(4.0), 2, 4).is_ok());
        assert!(validate_integer(&json!(-3.0), -5, 0).is_ok());

        let error = validate_integer(&json!(15000.5), i64::MIN, i64::MAX).unwrap_err();
        assert_eq!(error.code, "invalid_type");
        assert_eq!(error.params["received"], json!("float"));
    }

    #[test]
    fn test_validate_integer_reports_overflow() {
        let error = validate_integer(&json!(u64::MAX), i64::MIN, i64::MAX).unwrap_err();
        assert_eq!(error.code, "integer_overflow");
        assert!(!error.params.contains_key("received"));

        let error = validate_integer(&json!(1e30), i64::MIN, i64::MAX).unwrap_err();
        assert_eq!(error.code, "integer_overflow");

        let error = validate_integer(&json!(5.0e9), i32::MIN as i64, i32::MAX as i64).unwrap_err();
        assert_eq!(error.code, "integer_overflow");
    }

    #[test]
    fn test_as_integer() {
        let number = |value: Value| match value {
            Value::Number(number) => number,
            other => panic!("not a number: {}", other),
        };
        assert_eq!(as_integer(&number(json!(7))), Some(7));
        assert_eq!(as_integer(&number(json!(7.0))), Some(7));
        assert_eq!(as_integer(&number(json!(7.5))), None);
        assert_eq!(as_integer(&number(json!(u64::MAX))), None);
    }

    #[test]
    fn test_validate_enum() {
        let allowed = ["Street", "Custom", "Trail"];
        assert!(validate_enum(&json!("Trail"), &allowed).is_ok());
        assert!(validate_enum(&json!("Scooter"), &allowed).is_err());
        assert!(validate_enum(&json!(1), &allowed).is_err());
    }

    #[test]
    fn test_merge_results_flattens_fields() {
        let mut first = ValidationErrors::new();
        first.add("model", ValidationError::new("length"));
        let mut second = ValidationErrors::new();
        second.add("doorsQty", ValidationError::new("range"));

        let merged = merge_results([Err(first), Ok(()), Err(second)]).unwrap_err();
        let fields = merged.field_errors();
        assert!(fields.contains_key("model"));
        assert!(fields.contains_key("doorsQty"));
    }

    #[test]
    fn test_merge_results_ok_when_empty() {
        assert!(merge_results([Ok(()), Ok(())]).is_ok());
    }
}
