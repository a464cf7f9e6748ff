pub mod attachment;
pub mod conditional_section;
pub mod intake_record;
pub mod problem_category;
pub mod project_id;
pub mod use_case_type;
