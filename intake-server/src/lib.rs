pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::{ApiError, Result as ApiResult},
    submissions::{submissions::submit_project, submit_response::SubmitResponse},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
