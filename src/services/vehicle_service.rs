//! Service de vehículos
//!
//! Aplica el schema del tipo antes de delegar en el repositorio. Las
//! lecturas y el borrado pasan directamente porque no introducen contenido
//! nuevo.

use std::sync::Arc;

use serde_json::Value;
use validator::ValidationErrors;

use crate::database::{DocumentStore, StoreError};
use crate::dto::VehicleRecord;
use crate::models::schema::Schema;
use crate::repositories::VehicleRepository;

/// Resultado de una escritura validada
///
/// Los fallos del store no aparecen aquí: viajan como `Err(StoreError)`.
#[derive(Debug)]
pub enum Outcome<T> {
    Saved(VehicleRecord<T>),
    /// El store no devolvió ningún registro
    Missing,
    /// El payload no cumple el schema; no se llamó al store
    Rejected(ValidationErrors),
}

impl<T> Outcome<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

impl<T> From<Option<VehicleRecord<T>>> for Outcome<T> {
    fn from(record: Option<VehicleRecord<T>>) -> Self {
        record.map_or(Outcome::Missing, Outcome::Saved)
    }
}

pub struct VehicleService<T> {
    repository: VehicleRepository<T>,
}

impl<T: Schema> VehicleService<T> {
    pub fn new(repository: VehicleRepository<T>) -> Self {
        Self { repository }
    }

    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(VehicleRepository::new(store))
    }

    pub async fn create(&self, payload: &Value) -> Result<Outcome<T>, StoreError> {
        let obj = match T::safe_parse(payload) {
            Ok(obj) => obj,
            Err(errors) => return Ok(Outcome::Rejected(errors)),
        };

        let created = self.repository.create(&obj).await?;
        if let Some(record) = &created {
            tracing::info!("✅ {} creado: {}", T::COLLECTION, record.id);
        }
        Ok(created.into())
    }

    pub async fn read(&self) -> Result<Vec<VehicleRecord<T>>, StoreError> {
        self.repository.read().await
    }

    pub async fn read_one(&self, id: &str) -> Result<Option<VehicleRecord<T>>, StoreError> {
        self.repository.read_one(id).await
    }

    /// Revalida el registro completo, igual que en la creación
    pub async fn update(&self, id: &str, payload: &Value) -> Result<Outcome<T>, StoreError> {
        let obj = match T::safe_parse(payload) {
            Ok(obj) => obj,
            Err(errors) => return Ok(Outcome::Rejected(errors)),
        };

        let updated = self.repository.update(id, &obj).await?;
        if let Some(record) = &updated {
            tracing::info!("✏️ {} actualizado: {}", T::COLLECTION, record.id);
        }
        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> Result<Option<VehicleRecord<T>>, StoreError> {
        let deleted = self.repository.delete(id).await?;
        if let Some(record) = &deleted {
            tracing::info!("🗑️ {} eliminado: {}", T::COLLECTION, record.id);
        }
        Ok(deleted)
    }
}
