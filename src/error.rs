//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::MessageBody;

pub const INVALID_BODY: &str = "Cuerpo de la solicitud inválido";
pub const INVALID_QUERY: &str = "Parámetros de consulta inválidos";
pub const BODY_TOO_LARGE: &str = "Cuerpo de la solicitud demasiado grande";
pub const CHARACTER_NOT_FOUND: &str = "Personaje no encontrado";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Cuerpo de la solicitud demasiado grande")]
    PayloadTooLarge,
    /// Any database-layer failure. Only `message` reaches the client.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// PDF rendering failure; carries the library's description for the log.
    #[error("Error al generar el documento")]
    Document(String),
}

impl AppError {
    /// Wraps a driver error with the static message reported for the failing operation.
    pub fn storage(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Storage { message, source }
    }

    pub fn character_not_found() -> Self {
        AppError::NotFound(CHARACTER_NOT_FOUND.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage { .. } | AppError::Document(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::BadRequest(INVALID_BODY.into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected query string");
        AppError::BadRequest(INVALID_QUERY.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Storage { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            AppError::Document(detail) => {
                tracing::error!(error = %detail, "pdf rendering failed");
            }
            _ => {}
        }
        let status = self.status();
        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}
