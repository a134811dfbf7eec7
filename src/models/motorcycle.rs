//! Modelo de Motorcycle

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{FieldKind, FieldSpec, Schema};
use super::vehicle::Vehicle;

/// Categoría de motocicleta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Street,
    Custom,
    Trail,
}

impl Category {
    pub const NAMES: &'static [&'static str] = &["Street", "Custom", "Trail"];
}

/// Motocicleta: vehículo base más categoría y cilindrada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Motorcycle {
    #[serde(flatten)]
    pub vehicle: Vehicle,

    pub category: Category,

    #[serde(rename = "engineCapacity")]
    #[validate(range(min = 1, max = 2500))]
    pub engine_capacity: i32,
}

impl Schema for Motorcycle {
    const COLLECTION: &'static str = "motorcycles";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("category", FieldKind::OneOf(Category::NAMES)),
        FieldSpec::new("engineCapacity", FieldKind::Int),
    ];

    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}
