use std::marker::PhantomData;
use std::sync::Arc;

use crate::database::{Document, DocumentStore, StoreError};
use crate::dto::VehicleRecord;
use crate::models::schema::Schema;

/// Adaptador de persistencia genérico por tipo de vehículo
///
/// No valida nada: confía en que el service ya aplicó el schema. Los errores
/// del store se propagan sin interpretar.
pub struct VehicleRepository<T> {
    store: Arc<dyn DocumentStore>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for VehicleRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _kind: PhantomData,
        }
    }
}

impl<T: Schema> VehicleRepository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    pub async fn create(&self, obj: &T) -> Result<Option<VehicleRecord<T>>, StoreError> {
        let body = serde_json::to_value(obj)?;
        let created = self.store.insert(T::COLLECTION, body).await?;
        created.map(Self::decode).transpose()
    }

    pub async fn read(&self) -> Result<Vec<VehicleRecord<T>>, StoreError> {
        self.store
            .find_all(T::COLLECTION)
            .await?
            .into_iter()
            .map(Self::decode)
            .collect()
    }

    pub async fn read_one(&self, id: &str) -> Result<Option<VehicleRecord<T>>, StoreError> {
        let found = self.store.find_by_id(T::COLLECTION, id).await?;
        found.map(Self::decode).transpose()
    }

    /// Sustituye el registro completo; no es un merge parcial
    pub async fn update(&self, id: &str, obj: &T) -> Result<Option<VehicleRecord<T>>, StoreError> {
        let body = serde_json::to_value(obj)?;
        let updated = self.store.replace(T::COLLECTION, id, body).await?;
        updated.map(Self::decode).transpose()
    }

    pub async fn delete(&self, id: &str) -> Result<Option<VehicleRecord<T>>, StoreError> {
        let removed = self.store.remove(T::COLLECTION, id).await?;
        removed.map(Self::decode).transpose()
    }

    fn decode(document: Document) -> Result<VehicleRecord<T>, StoreError> {
        match serde_json::from_value(document.body) {
            Ok(data) => Ok(VehicleRecord::new(document.id, data)),
            Err(source) => Err(StoreError::Corrupt {
                id: document.id,
                source,
            }),
        }
    }
}
