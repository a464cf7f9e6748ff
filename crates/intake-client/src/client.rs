//! HTTP client for the intake submission endpoint.

use crate::{ClientError, ClientResult, SubmissionResult};

use intake_core::{FormState, IntakeRecord};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;

const SUBMIT_PATH: &str = "/api/submit-project";

/// Client for the intake server
pub struct IntakeClient {
    pub base_url: String,
    http: ReqwestClient,
}

impl IntakeClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: ReqwestClient::new(),
        }
    }

    /// Submit one intake record.
    ///
    /// Serializes the full record (attachment references included) as JSON
    /// and issues a single POST. Any failure - transport error or non-2xx
    /// status - yields a generic error; there is no retry.
    pub async fn submit(&self, record: &IntakeRecord) -> ClientResult<SubmissionResult> {
        let url = format!("{}{}", self.base_url, SUBMIT_PATH);

        log::debug!("Submitting project: title={:?}", record.title);

        let response = self.http.post(&url).json(record).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Server answers 500 with { success: false, error } on a
            // malformed body; anything else gets the same generic surface
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|e| e.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| "Error submitting project".to_string());

            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let result: SubmissionResult = response.json().await?;

        log::info!("Project submitted: {}", result.project_id);

        Ok(result)
    }

    /// Drive one submit through the form's phase transitions.
    ///
    /// Enters `Submitting`, issues the request, and returns to `Editing`
    /// unconditionally - the form is editable again whatever the outcome.
    pub async fn submit_form(&self, form: &mut FormState) -> ClientResult<SubmissionResult> {
        form.begin_submit();
        let outcome = self.submit(form.record()).await;
        form.finish_submit();
        outcome
    }
}
