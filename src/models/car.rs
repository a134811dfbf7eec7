//! Modelo de Car

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{FieldKind, FieldSpec, Schema};
use super::vehicle::Vehicle;

/// Coche: vehículo base más número de puertas y asientos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Car {
    #[serde(flatten)]
    pub vehicle: Vehicle,

    #[serde(rename = "doorsQty")]
    #[validate(range(min = 2, max = 4))]
    pub doors_qty: i32,

    #[serde(rename = "seatsQty")]
    #[validate(range(min = 2, max = 7))]
    pub seats_qty: i32,
}

impl Schema for Car {
    const COLLECTION: &'static str = "cars";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("doorsQty", FieldKind::Int),
        FieldSpec::new("seatsQty", FieldKind::Int),
    ];

    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}
