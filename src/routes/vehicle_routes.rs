use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::controllers::{check_id, Reply, VehicleController};
use crate::dto::VehicleRecord;
use crate::models::schema::Schema;
use crate::utils::errors::{AppError, AppResult};

type SharedController<T> = State<Arc<VehicleController<T>>>;

/// Registro de rutas CRUD por tipo de vehículo
///
/// Cada controller se monta bajo su propio prefijo:
/// `POST|GET {prefix}` y `GET|PUT|DELETE {prefix}/:id`.
#[derive(Default)]
pub struct VehicleRouter {
    router: Router,
}

impl VehicleRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monta el controller bajo su propia ruta
    pub fn add_route<T: Schema>(self, controller: VehicleController<T>) -> Self {
        let prefix = controller.route().to_string();
        self.add_route_at(controller, &prefix)
    }

    /// Monta el controller bajo `prefix`, ignorando la ruta del controller
    pub fn add_route_at<T: Schema>(self, controller: VehicleController<T>, prefix: &str) -> Self {
        tracing::debug!("🛣️ Registrando rutas bajo {}", prefix);

        let routes = Router::new()
            .route(prefix, post(create_vehicle::<T>).get(list_vehicles::<T>))
            .route(
                &format!("{}/:id", prefix),
                get(get_vehicle::<T>)
                    .put(update_vehicle::<T>)
                    .delete(delete_vehicle::<T>),
            )
            .with_state(Arc::new(controller));

        Self {
            router: self.router.merge(routes),
        }
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn create_vehicle<T: Schema>(
    State(controller): SharedController<T>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Reply<VehicleRecord<T>>> {
    let Json(body) = payload.map_err(reject_body)?;
    controller.create(&body).await
}

async fn list_vehicles<T: Schema>(
    State(controller): SharedController<T>,
) -> AppResult<Reply<Vec<VehicleRecord<T>>>> {
    controller.read().await
}

async fn get_vehicle<T: Schema>(
    State(controller): SharedController<T>,
    Path(id): Path<String>,
) -> AppResult<Reply<VehicleRecord<T>>> {
    controller.read_one(&id).await
}

async fn update_vehicle<T: Schema>(
    State(controller): SharedController<T>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Reply<VehicleRecord<T>>> {
    // El id se comprueba antes que el body
    check_id(&id)?;
    let Json(body) = payload.map_err(reject_body)?;
    controller.update(&id, &body).await
}

async fn delete_vehicle<T: Schema>(
    State(controller): SharedController<T>,
    Path(id): Path<String>,
) -> AppResult<Reply<VehicleRecord<T>>> {
    controller.delete(&id).await
}

fn reject_body(rejection: JsonRejection) -> AppError {
    tracing::debug!("⚠️ Body JSON rechazado: {}", rejection);
    AppError::BadRequest
}
