//! Rutas de la API
//!
//! Monta `/cars` y `/motorcycles` sobre el mismo document store, más un
//! endpoint de salud.

pub mod vehicle_routes;

use std::sync::Arc;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::config::environment::EnvironmentConfig;
use crate::controllers::VehicleController;
use crate::database::DocumentStore;
use crate::middleware::{cors_layer, trace_layer};
use crate::models::{car::Car, motorcycle::Motorcycle};

pub use vehicle_routes::VehicleRouter;

pub const CARS_ROUTE: &str = "/cars";
pub const MOTORCYCLES_ROUTE: &str = "/motorcycles";

/// Construye el router completo de la aplicación
pub fn create_app(store: Arc<dyn DocumentStore>, config: &EnvironmentConfig) -> Router {
    VehicleRouter::new()
        .add_route(VehicleController::<Car>::with_store(store.clone(), CARS_ROUTE))
        .add_route(VehicleController::<Motorcycle>::with_store(store, MOTORCYCLES_ROUTE))
        .into_router()
        .route("/health", get(health_check))
        .layer(trace_layer())
        .layer(cors_layer(&config.cors_origins))
}

/// Endpoint de salud simple
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vehicle-catalog",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
