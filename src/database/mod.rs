//! Módulo de base de datos
//!
//! Define el document store opaco sobre el que trabajan los repositorios:
//! colecciones de documentos JSON direccionados por un identificador de 24
//! caracteres hexadecimales. Hay dos implementaciones, en memoria y
//! PostgreSQL.

pub mod connection;
pub mod memory;
pub mod object_id;


use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use connection::PostgresStore;
pub use memory::MemoryStore;

/// Errores del document store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cast to ObjectId failed for value \"{0}\"")]
    InvalidId(String),

    #[error("Document '{id}' cannot be decoded: {source}")]
    Corrupt {
        id: String,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Documento almacenado: identificador asignado por el store más su cuerpo
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Value,
}

/// Primitivas CRUD de un document store
///
/// Ninguna operación valida el contenido de los documentos. Las operaciones
/// direccionadas por id rechazan con `StoreError::InvalidId` cualquier
/// identificador que no sea un ObjectId bien formado.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserta un documento nuevo y le asigna un identificador.
    /// `None` indica que el store no creó nada.
    async fn insert(&self, collection: &str, body: Value) -> Result<Option<Document>, StoreError>;

    /// Todos los documentos de la colección, en orden de inserción
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Sustituye el cuerpo completo del documento y devuelve el resultado
    async fn replace(
        &self,
        collection: &str,
        id: &str,
        body: Value,
    ) -> Result<Option<Document>, StoreError>;

    /// Elimina el documento y devuelve su contenido previo
    async fn remove(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;
}

/// Rechaza identificadores mal formados antes de tocar el store y devuelve
/// la forma canónica (minúsculas)
pub(crate) fn normalize_object_id(id: &str) -> Result<String, StoreError> {
    if object_id::is_valid(id) {
        Ok(id.to_lowercase())
    } else {
        Err(StoreError::InvalidId(id.to_string()))
    }
}
