pub mod form_field;
pub mod form_state;
