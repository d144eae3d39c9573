//! API error translation.
//!
//! Maps the three error classes to HTTP status codes: schema/value
//! validation → 422 with field errors, domain-rule violations → 400,
//! missing resources → 404, storage or internal failures → 500 with the
//! message echoed to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    domain::ValueObjectError,
    usecase::{RoomsServiceError, ScoresServiceError},
};

/// A single field validation failure, FastAPI-style
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
}

/// Error response for any API handler
#[derive(Debug)]
pub enum ApiError {
    /// Input payload failed validation (422)
    Validation(Vec<FieldError>),
    /// A domain rule was violated (400)
    BadRequest(String),
    /// The addressed resource does not exist (404)
    NotFound(String),
    /// Unexpected internal failure (500)
    Internal(String),
}

impl ApiError {
    /// Validation error for a single field
    pub fn validation(location: &str, field: &str, error: &ValueObjectError) -> Self {
        Self::Validation(vec![FieldError {
            loc: vec![location.to_string(), field.to_string()],
            msg: error.to_string(),
        }])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "detail": errors })),
            )
                .into_response(),
            Self::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "detail": detail })),
            )
                .into_response(),
            Self::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "detail": detail })),
            )
                .into_response(),
            Self::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": detail })),
            )
                .into_response(),
        }
    }
}

impl From<RoomsServiceError> for ApiError {
    fn from(e: RoomsServiceError) -> Self {
        match e {
            RoomsServiceError::NotFound(_) => Self::NotFound(e.to_string()),
            RoomsServiceError::Rule(_) => Self::BadRequest(e.to_string()),
            RoomsServiceError::Validation(_) | RoomsServiceError::Repository(_) => {
                tracing::error!("rooms service failure: {e}");
                Self::Internal(e.to_string())
            }
        }
    }
}

impl From<ScoresServiceError> for ApiError {
    fn from(e: ScoresServiceError) -> Self {
        tracing::error!("scores service failure: {e}");
        Self::Internal(e.to_string())
    }
}
