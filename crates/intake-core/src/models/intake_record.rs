//! Intake record - the flat set of fields describing a proposed project.

use crate::{Attachment, ConditionalSection, ProblemCategory, UseCaseType};

use serde::{Deserialize, Serialize};

/// Everything the intake form collects for one proposal.
/// Title is the only required field, and only at the form layer -
/// the server never rechecks it. Serialized field names are camelCase
/// to match the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeRecord {
    pub title: String,
    pub team: Option<String>,
    pub description: Option<String>,
    pub business_problem: Option<String>,
    pub expected_impact: Option<String>,
    pub current_process: Option<String>,
    pub time_investment: Option<String>,
    pub people_affected: Option<String>,
    pub timeline: Option<String>,
    pub use_case_type: Option<UseCaseType>,
    pub problem_category: Option<ProblemCategory>,
    pub files: Vec<Attachment>,
}

impl IntakeRecord {
    /// Create an empty record, as on form mount
    pub fn new() -> Self {
        Self::default()
    }

    /// Native required-field semantics: a non-blank title
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// The conditional section revealed by the current use case type.
    /// Computed view: at most one, none when nothing is selected.
    pub fn active_section(&self) -> Option<ConditionalSection> {
        self.use_case_type
            .as_ref()
            .and_then(UseCaseType::conditional_section)
    }
}
