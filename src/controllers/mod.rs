//! Controllers
//!
//! Traducen peticiones HTTP a llamadas a los services y sus resultados a
//! códigos de estado y cuerpos JSON.

pub mod vehicle_controller;

pub use vehicle_controller::{check_id, Reply, VehicleController, MIN_ID_LENGTH};
