//! Objetos de transferencia expuestos por la API

pub mod vehicle_dto;

pub use vehicle_dto::VehicleRecord;
