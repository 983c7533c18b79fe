//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown store backend: {0}")]
    UnknownStore(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A record the landing page cannot render without is absent.
    #[error("{0} missing")]
    MissingRequired(&'static str),
    /// A create referenced a parent row that does not exist.
    #[error("{kind} {id} not found")]
    ForeignKey { kind: &'static str, id: i32 },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}

/// Body extraction failures answer inside the error envelope instead of axum's plain text.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::MissingRequired(_) => (StatusCode::NOT_FOUND, "missing_required"),
            AppError::ForeignKey { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let details = match &self {
            AppError::ForeignKey { kind, id } => Some(serde_json::json!({ "kind": kind, "id": id })),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_messages() {
        assert_eq!(AppError::MissingRequired("hero section").to_string(), "hero section missing");
        assert_eq!(AppError::MissingRequired("community stats").to_string(), "community stats missing");
    }

    #[test]
    fn foreign_key_message_names_id() {
        let err = AppError::ForeignKey { kind: "sdk showcase", id: 42 };
        assert_eq!(err.to_string(), "sdk showcase 42 not found");
        assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, "not_found"));
    }

    #[test]
    fn config_errors_map_to_500() {
        let err = AppError::from(ConfigError::InvalidValue { key: "DATABASE_URL", value: "nope".into() });
        assert_eq!(err.to_string(), "invalid value for DATABASE_URL: 'nope'");
        assert_eq!(err.status_and_code(), (StatusCode::INTERNAL_SERVER_ERROR, "config_error"));
    }

    #[test]
    fn db_errors_map_to_500() {
        let err = AppError::Db(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
