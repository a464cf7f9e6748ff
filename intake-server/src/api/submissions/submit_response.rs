use intake_core::ProjectId;

use serde::Serialize;

/// Acknowledgement for one accepted submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub project_id: ProjectId,
    pub message: String,
}
