//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la capa HTTP y su conversión a
//! respuestas. Todas las respuestas de error comparten la forma
//! `{ "error": <mensaje o detalle> }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use validator::ValidationErrors;

use crate::database::StoreError;

/// Mensajes de error expuestos al cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    Internal,
    NotFound,
    BadRequest,
    IdLength,
}

impl ErrorMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorMessage::Internal => "Internal Server Error",
            ErrorMessage::NotFound => "Object not Found",
            ErrorMessage::BadRequest => "Bad request",
            ErrorMessage::IdLength => "Id must have 24 hexadecimal characters",
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Bad request")]
    BadRequest,

    #[error("Id too short: '{0}'")]
    IdLength(String),

    #[error("Not found")]
    NotFound,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest | AppError::IdLength(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Cuerpo JSON de la respuesta; nunca incluye el error original del store
    pub fn body(&self) -> Value {
        match self {
            AppError::Validation(errors) => json!({ "error": errors }),
            AppError::BadRequest => json!({ "error": ErrorMessage::BadRequest.as_str() }),
            AppError::IdLength(_) => json!({ "error": ErrorMessage::IdLength.as_str() }),
            AppError::NotFound => json!({ "error": ErrorMessage::NotFound.as_str() }),
            AppError::Store(_) => json!({ "error": ErrorMessage::Internal.as_str() }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => tracing::error!("❌ Error del store: {}", e),
            AppError::Validation(e) => tracing::debug!("⚠️ Payload rechazado: {}", e),
            other => tracing::debug!("⚠️ {}", other),
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::IdLength("1".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Store(StoreError::InvalidId("abc".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_is_not_leaked() {
        let error = AppError::Store(StoreError::InvalidId("password=hunter2".into()));
        let body = error.body();
        assert_eq!(body["error"], "Internal Server Error");
        assert!(!body.to_string().contains("hunter2"));
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("model", ValidationError::new("length"));
        let body = AppError::Validation(errors).body();
        assert!(body["error"].get("model").is_some());
    }

    #[test]
    fn test_id_length_message() {
        let body = AppError::IdLength("1".into()).body();
        assert_eq!(body["error"], "Id must have 24 hexadecimal characters");
    }
}
