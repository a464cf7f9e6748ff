pub mod error;
pub mod form;
pub mod id;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use form::form_field::FormField;
pub use form::form_state::{FormPhase, FormState};
pub use id::id_source::{IdSource, SystemIdSource};
pub use models::attachment::Attachment;
pub use models::conditional_section::ConditionalSection;
pub use models::intake_record::IntakeRecord;
pub use models::problem_category::ProblemCategory;
pub use models::project_id::ProjectId;
pub use models::use_case_type::UseCaseType;
