mod client;
mod error;
mod submission_result;

pub use client::IntakeClient;
pub use error::{ClientError, ClientResult};
pub use submission_result::SubmissionResult;
