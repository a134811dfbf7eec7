//! Modelo de Vehicle
//!
//! Campos comunes a todos los tipos de vehículo. Cada tipo concreto lo
//! incrusta con `#[serde(flatten)]` y añade sus propios campos.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{FieldKind, FieldSpec};

/// Forma JSON de los campos base
pub const VEHICLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("model", FieldKind::Text),
    FieldSpec::new("year", FieldKind::Int),
    FieldSpec::new("color", FieldKind::Text),
    FieldSpec::new("buyValue", FieldKind::BigInt),
];

/// Vehicle base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Vehicle {
    #[validate(length(min = 3))]
    pub model: String,

    #[validate(range(min = 1900, max = 2022))]
    pub year: i32,

    #[validate(length(min = 3))]
    pub color: String,

    /// Precio de compra en unidades monetarias enteras
    #[serde(rename = "buyValue")]
    pub buy_value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uno() -> Vehicle {
        Vehicle {
            model: "Fiat Uno".to_string(),
            year: 2015,
            color: "blue".to_string(),
            buy_value: 15000,
        }
    }

    #[test]
    fn test_valid_vehicle() {
        assert!(uno().validate().is_ok());
    }

    #[test]
    fn test_short_model_and_color() {
        let vehicle = Vehicle {
            model: "ab".to_string(),
            color: "re".to_string(),
            ..uno()
        };
        let errors = vehicle.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("model"));
        assert!(fields.contains_key("color"));
    }

    #[test]
    fn test_year_bounds() {
        assert!(Vehicle { year: 1900, ..uno() }.validate().is_ok());
        assert!(Vehicle { year: 2022, ..uno() }.validate().is_ok());
        assert!(Vehicle { year: 1899, ..uno() }.validate().is_err());
        assert!(Vehicle { year: 2050, ..uno() }.validate().is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(uno()).unwrap();
        assert_eq!(json["buyValue"], 15000);
        assert!(json.get("buy_value").is_none());
    }
}
