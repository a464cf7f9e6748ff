use crate::{
    Attachment, ConditionalSection, CoreError, FormField, FormPhase, FormState, UseCaseType,
};

#[test]
fn test_new_form_is_empty_and_editing() {
    let form = FormState::new();

    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.record().title, "");
    assert!(form.record().files.is_empty());
    assert_eq!(form.visible_section(), None);
    assert!(!form.is_submittable());
}

#[test]
fn test_set_text_fields() {
    let mut form = FormState::new();

    form.set_field(FormField::Title, "Automated Sales Email Generator")
        .unwrap();
    form.set_field(FormField::Team, "Sales Ops").unwrap();

    assert_eq!(form.record().title, "Automated Sales Email Generator");
    assert_eq!(form.record().team.as_deref(), Some("Sales Ops"));
    assert!(form.is_submittable());
}

#[test]
fn test_empty_value_clears_optional_field() {
    let mut form = FormState::new();

    form.set_field(FormField::Timeline, "Q3").unwrap();
    assert_eq!(form.record().timeline.as_deref(), Some("Q3"));

    form.set_field(FormField::Timeline, "").unwrap();
    assert_eq!(form.record().timeline, None);
}

#[test]
fn test_automation_reveals_manual_process_section() {
    let mut form = FormState::new();

    form.set_field(FormField::UseCaseType, "automation").unwrap();
    assert_eq!(form.visible_section(), Some(ConditionalSection::Automation));
    assert_eq!(form.record().use_case_type, Some(UseCaseType::Automation));
}

#[test]
fn test_other_type_hides_automation_section() {
    let mut form = FormState::new();

    form.set_field(FormField::UseCaseType, "automation").unwrap();
    form.set_field(FormField::UseCaseType, "research").unwrap();

    assert_eq!(form.visible_section(), None);
}

#[test]
fn test_content_creation_and_data_analysis_sections() {
    let mut form = FormState::new();

    form.set_field(FormField::UseCaseType, "content-creation")
        .unwrap();
    assert_eq!(
        form.visible_section(),
        Some(ConditionalSection::ContentCreation)
    );

    form.set_field(FormField::UseCaseType, "data-analysis")
        .unwrap();
    assert_eq!(
        form.visible_section(),
        Some(ConditionalSection::DataAnalysis)
    );
}

#[test]
fn test_empty_selection_hides_all_sections() {
    let mut form = FormState::new();

    form.set_field(FormField::UseCaseType, "automation").unwrap();
    form.set_field(FormField::UseCaseType, "").unwrap();

    assert_eq!(form.visible_section(), None);
    assert_eq!(form.record().use_case_type, None);
}

#[test]
fn test_invalid_use_case_type_rejected() {
    let mut form = FormState::new();

    let err = form
        .set_field(FormField::UseCaseType, "telepathy")
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidUseCaseType { .. }));

    // Record untouched on rejection
    assert_eq!(form.record().use_case_type, None);
}

#[test]
fn test_invalid_problem_category_rejected() {
    let mut form = FormState::new();

    let err = form
        .set_field(FormField::ProblemCategory, "bad-weather")
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidProblemCategory { .. }));
}

#[test]
fn test_attach_files_appends_in_order() {
    let mut form = FormState::new();

    form.attach_files([Attachment::new("plan.pdf", 1024)]);
    form.attach_files([
        Attachment::new("data.csv", 2048),
        Attachment::new("mockup.png", 4096),
    ]);

    let names: Vec<&str> = form
        .record()
        .files
        .iter()
        .map(|f| f.file_name.as_str())
        .collect();
    assert_eq!(names, ["plan.pdf", "data.csv", "mockup.png"]);
}

#[test]
fn test_attach_files_never_deduplicates() {
    let mut form = FormState::new();

    form.attach_files([Attachment::new("plan.pdf", 1024)]);
    form.attach_files([Attachment::new("plan.pdf", 1024)]);

    assert_eq!(form.record().files.len(), 2);
}

#[test]
fn test_submit_phase_round_trip() {
    let mut form = FormState::new();

    form.begin_submit();
    assert_eq!(form.phase(), FormPhase::Submitting);

    form.finish_submit();
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn test_begin_submit_reentrant() {
    let mut form = FormState::new();

    // Nothing disables the submit control while a request is in flight
    form.begin_submit();
    form.begin_submit();
    assert_eq!(form.phase(), FormPhase::Submitting);
}

#[test]
fn test_field_from_wire_name() {
    let field: FormField = "businessProblem".parse().unwrap();
    assert_eq!(field, FormField::BusinessProblem);
    assert_eq!(field.as_str(), "businessProblem");

    let err = "business_problem".parse::<FormField>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownFormField { .. }));
}
