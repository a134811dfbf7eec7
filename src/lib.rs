//! Catálogo de vehículos
//!
//! Servicio CRUD para coches y motocicletas. Cada tipo de vehículo recorre la
//! misma cadena genérica: controller → service (validación) → repository →
//! document store.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;

pub use routes::create_app;
