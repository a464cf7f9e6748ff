mod form_state;
mod intake_record;
mod project_id;
