//! Error-to-HTTP-response mapping.
//!
//! Implements axum's `IntoResponse` for the crate error type so handlers can
//! return `Result<_, Error>` directly. Business errors surface as client
//! errors with a stable code and a human-readable message; storage and
//! environment failures are logged and collapsed to an opaque 500.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Error code (for client error handling)
    code: &'static str,
    /// Human-readable error message
    message: String,
}

impl Error {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::CapacityExceeded { .. } => (StatusCode::BAD_REQUEST, "TRIP_FULL"),
            Self::TripNotFound { .. } => (StatusCode::NOT_FOUND, "TRIP_NOT_FOUND"),
            Self::ParticipantNotFound { .. } => (StatusCode::NOT_FOUND, "PARTICIPANT_NOT_FOUND"),
            Self::RegistrationNotFound { .. } => {
                (StatusCode::NOT_FOUND, "REGISTRATION_NOT_FOUND")
            }
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, code, "Internal server error");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}
