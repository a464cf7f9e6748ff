use serde::Deserialize;

/// Server acknowledgement for one submission.
/// Ephemeral: exists only to surface the generated id to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub project_id: String,
    pub message: String,
}
