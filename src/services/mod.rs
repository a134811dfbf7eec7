//! Services module
//!
//! Este módulo contiene la capa de orquestación: valida los payloads contra
//! el schema de cada tipo de vehículo antes de delegar en los repositorios.

pub mod vehicle_service;

pub use vehicle_service::{Outcome, VehicleService};
