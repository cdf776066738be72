//! Mapping of core and payload errors onto HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::types::ErrorResponse;
use crate::error::PlanError;
use crate::request::FieldError;

/// Errors returned from API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The core rejected the request.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// The payload parsed but violates numeric constraints.
    #[error("invalid payload: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// The body is not a well-formed request.
    #[error("malformed payload: {}", .0.body_text())]
    Malformed(#[from] JsonRejection),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Plan(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Malformed(rejection) => rejection.status(),
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::Plan(e) => e.kind(),
            ApiError::Validation(_) => "ValidationError",
            ApiError::Malformed(_) => "MalformedPayload",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error = %self, %status, "client error");

        let body = ErrorResponse {
            error: self.error_type().to_string(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
