//! Submission intake handler
//!
//! Stateless placeholder endpoint: accepts any parseable JSON body,
//! synthesizes a project id, logs a payload subset, and acknowledges.
//! No schema validation, no idempotency, no persistence.

use crate::{ApiResult, AppState, SubmitResponse};

use intake_core::ProjectId;

use axum::{Json, extract::State};
use bytes::Bytes;
use serde_json::Value;

const SUCCESS_MESSAGE: &str = "Project submitted successfully";

/// POST /api/submit-project
///
/// The body is taken raw rather than through the Json extractor so a
/// parse failure maps to this API's 500 contract instead of axum's
/// default rejection. A body missing all expected fields, or one that
/// is not an object at all, is still accepted.
pub async fn submit_project(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SubmitResponse>> {
    let data: Value = serde_json::from_slice(&body)?;

    let project_id = ProjectId::generate(state.ids.as_ref());

    // TODO: Implement actual project submission logic
    // - Save to database
    // - Trigger AI evaluation
    // - Send to Confluence
    // - Notify Slack

    log::info!(
        "New project submission: project_id={} title={:?} team={:?} useCaseType={:?} problemCategory={:?}",
        project_id,
        string_field(&data, "title"),
        string_field(&data, "team"),
        string_field(&data, "useCaseType"),
        string_field(&data, "problemCategory"),
    );

    Ok(Json(SubmitResponse {
        success: true,
        project_id,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}

/// Field lookup for the diagnostic log; None for missing fields,
/// non-string values, or a non-object body
fn string_field<'a>(data: &'a Value, name: &str) -> Option<&'a str> {
    data.get(name).and_then(Value::as_str)
}
