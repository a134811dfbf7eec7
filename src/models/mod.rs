//! Modelos del sistema
//!
//! Schemas de cada tipo de vehículo. `Vehicle` contiene los campos comunes;
//! `Car` y `Motorcycle` lo extienden por composición.

pub mod car;
pub mod motorcycle;
pub mod schema;
pub mod vehicle;

pub use car::Car;
pub use motorcycle::{Category, Motorcycle};
pub use schema::{FieldKind, FieldSpec, Schema};
pub use vehicle::Vehicle;
