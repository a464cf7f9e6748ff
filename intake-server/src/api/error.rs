//! Submission API error types
//!
//! The endpoint recognizes exactly one failure mode: a body that does
//! not parse as JSON. It answers 500 with a generic error body; every
//! other failure class is left to the framework's defaults.

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body: `{ "success": false, "error": ... }`
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not parseable JSON (500)
    #[error("Malformed request body: {message} {location}")]
    MalformedBody {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging; the client only
        // ever sees the generic message
        log::error!("Error submitting project: {}", self);

        let body = ApiErrorResponse {
            success: false,
            error: "Failed to submit project".to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Convert JSON parse errors to API errors
impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedBody {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
