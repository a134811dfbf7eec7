use std::sync::Arc;

use axum::{http::StatusCode, Json};
use serde_json::Value;

use crate::database::DocumentStore;
use crate::dto::VehicleRecord;
use crate::models::schema::Schema;
use crate::services::{Outcome, VehicleService};
use crate::utils::errors::{AppError, AppResult};

/// Longitud mínima de un identificador aceptado por la API
pub const MIN_ID_LENGTH: usize = 24;

/// Respuesta de éxito: código HTTP más cuerpo JSON
pub type Reply<B> = (StatusCode, Json<B>);

/// Traductor HTTP genérico por tipo de vehículo
///
/// Cada operación es de un solo paso: comprobación del id, delegación en el
/// service y traducción del resultado. Los fallos del store acaban como
/// `AppError::Store` (500).
pub struct VehicleController<T> {
    service: VehicleService<T>,
    route: String,
}

impl<T: Schema> VehicleController<T> {
    pub fn new(service: VehicleService<T>, route: impl Into<String>) -> Self {
        Self {
            service,
            route: route.into(),
        }
    }

    pub fn with_store(store: Arc<dyn DocumentStore>, route: impl Into<String>) -> Self {
        Self::new(VehicleService::with_store(store), route)
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub async fn create(&self, body: &Value) -> AppResult<Reply<VehicleRecord<T>>> {
        match self.service.create(body).await? {
            Outcome::Saved(record) => Ok((StatusCode::CREATED, Json(record))),
            Outcome::Missing => Err(AppError::BadRequest),
            Outcome::Rejected(errors) => Err(AppError::Validation(errors)),
        }
    }

    pub async fn read(&self) -> AppResult<Reply<Vec<VehicleRecord<T>>>> {
        let records = self.service.read().await?;
        Ok((StatusCode::OK, Json(records)))
    }

    pub async fn read_one(&self, id: &str) -> AppResult<Reply<VehicleRecord<T>>> {
        check_id(id)?;
        let record = self.service.read_one(id).await?.ok_or(AppError::NotFound)?;
        Ok((StatusCode::OK, Json(record)))
    }

    pub async fn update(&self, id: &str, body: &Value) -> AppResult<Reply<VehicleRecord<T>>> {
        check_id(id)?;
        match self.service.update(id, body).await? {
            Outcome::Saved(record) => Ok((StatusCode::OK, Json(record))),
            Outcome::Missing => Err(AppError::NotFound),
            Outcome::Rejected(errors) => Err(AppError::Validation(errors)),
        }
    }

    /// Devuelve 204 junto con el registro tal como estaba antes del borrado
    pub async fn delete(&self, id: &str) -> AppResult<Reply<VehicleRecord<T>>> {
        check_id(id)?;
        let record = self.service.delete(id).await?.ok_or(AppError::NotFound)?;
        Ok((StatusCode::NO_CONTENT, Json(record)))
    }
}

/// Solo comprueba la longitud mínima; el formato hexadecimal lo impone el store
pub fn check_id(id: &str) -> AppResult<()> {
    if id.chars().count() < MIN_ID_LENGTH {
        return Err(AppError::IdLength(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{MemoryStore, StoreError};
    use crate::models::car::Car;
    use serde_json::json;

    const MISSING_ID: &str = "4edd40c86762e0fb12000003";

    fn new_car() -> Value {
        json!({
            "model": "Fiat Uno",
            "year": 2015,
            "color": "blue",
            "buyValue": 15000,
            "doorsQty": 4,
            "seatsQty": 5
        })
    }

    fn controller() -> VehicleController<Car> {
        VehicleController::with_store(Arc::new(MemoryStore::new()), "/cars")
    }

    #[tokio::test]
    async fn test_create_returns_201() {
        let controller = controller();
        let (status, Json(record)) = controller.create(&new_car()).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record.id.len(), 24);
        assert_eq!(record.data.vehicle.model, "Fiat Uno");
    }

    #[tokio::test]
    async fn test_create_invalid_returns_validation_error() {
        let mut payload = new_car();
        payload["model"] = json!("ab");

        let error = controller().create(&payload).await.unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_read_empty_returns_200() {
        let (status, Json(records)) = controller().read().await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_short_id_is_rejected_before_lookup() {
        let controller = controller();
        for id in ["1", "4edd40c86762e0fb1200000"] {
            assert!(matches!(controller.read_one(id).await, Err(AppError::IdLength(_))));
            assert!(matches!(
                controller.update(id, &new_car()).await,
                Err(AppError::IdLength(_))
            ));
            assert!(matches!(controller.delete(id).await, Err(AppError::IdLength(_))));
        }
    }

    #[tokio::test]
    async fn test_missing_id_returns_not_found() {
        let controller = controller();
        assert!(matches!(controller.read_one(MISSING_ID).await, Err(AppError::NotFound)));
        assert!(matches!(
            controller.update(MISSING_ID, &new_car()).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(controller.delete(MISSING_ID).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_long_non_hex_id_is_a_store_error() {
        let error = controller()
            .read_one("this-id-is-long-but-not-hex")
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::Store(StoreError::InvalidId(_))));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_update_invalid_returns_validation_error() {
        let controller = controller();
        let (_, Json(created)) = controller.create(&new_car()).await.unwrap();

        let mut payload = new_car();
        payload["doorsQty"] = json!(9);
        let error = controller.update(&created.id, &payload).await.unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));
        assert!(error.body()["error"].is_object());
    }

    #[tokio::test]
    async fn test_delete_returns_204_with_prior_record() {
        let controller = controller();
        let (_, Json(created)) = controller.create(&new_car()).await.unwrap();

        let (status, Json(deleted)) = controller.delete(&created.id).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(deleted, created);
        assert!(matches!(controller.read_one(&created.id).await, Err(AppError::NotFound)));
    }
}
