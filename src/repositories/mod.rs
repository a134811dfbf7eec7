//! Repositorios
//!
//! Adaptadores de persistencia entre los services y el document store.

pub mod vehicle_repository;

pub use vehicle_repository::VehicleRepository;
