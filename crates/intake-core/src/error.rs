use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid use case type: {value} {location}")]
    InvalidUseCaseType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid problem category: {value} {location}")]
    InvalidProblemCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown form field: {value} {location}")]
    UnknownFormField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project id: {value} {location}")]
    InvalidProjectId {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
