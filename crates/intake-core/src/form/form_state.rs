//! Form-state manager for the intake form.
//!
//! Owns one mutable `IntakeRecord`, mutated field-by-field as the user
//! types. Conditional section visibility is a computed view over the
//! selected use case type, never separately tracked state.

use crate::{Attachment, ConditionalSection, FormField, IntakeRecord, Result as CoreResult};

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting input (the default, and the state after every submit)
    #[default]
    Editing,
    /// A submit request is in flight. Nothing prevents re-entering
    /// submit from here; double submission is possible by construction.
    Submitting,
}

/// In-memory state of one intake form instance.
/// Created empty on mount, discarded on navigation, never persisted.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    record: IntakeRecord,
    phase: FormPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Replace one field's value. Empty input clears an optional field;
    /// enum-backed fields reject values outside their option list.
    pub fn set_field(&mut self, field: FormField, value: &str) -> CoreResult<()> {
        match field {
            FormField::Title => self.record.title = value.to_string(),
            FormField::Team => self.record.team = optional(value),
            FormField::Description => self.record.description = optional(value),
            FormField::BusinessProblem => self.record.business_problem = optional(value),
            FormField::ExpectedImpact => self.record.expected_impact = optional(value),
            FormField::CurrentProcess => self.record.current_process = optional(value),
            FormField::TimeInvestment => self.record.time_investment = optional(value),
            FormField::PeopleAffected => self.record.people_affected = optional(value),
            FormField::Timeline => self.record.timeline = optional(value),
            FormField::UseCaseType => {
                self.record.use_case_type = match value {
                    "" => None,
                    v => Some(v.parse()?),
                };
            }
            FormField::ProblemCategory => {
                self.record.problem_category = match value {
                    "" => None,
                    v => Some(v.parse()?),
                };
            }
        }

        Ok(())
    }

    /// Append newly selected files to the attachment list.
    /// Never replaces or deduplicates; order is preserved.
    pub fn attach_files(&mut self, files: impl IntoIterator<Item = Attachment>) {
        self.record.files.extend(files);
    }

    /// Section currently revealed by the use case selector, if any
    pub fn visible_section(&self) -> Option<ConditionalSection> {
        self.record.active_section()
    }

    /// Native required-field check: only the title must be non-blank
    pub fn is_submittable(&self) -> bool {
        self.record.is_submittable()
    }

    /// Enter the submitting phase. Callable from any phase.
    pub fn begin_submit(&mut self) {
        self.phase = FormPhase::Submitting;
    }

    /// Return to editing, unconditionally, regardless of outcome
    pub fn finish_submit(&mut self) {
        self.phase = FormPhase::Editing;
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
