use crate::{Attachment, ConditionalSection, IntakeRecord, ProblemCategory, UseCaseType};

#[test]
fn test_serializes_camel_case() {
    let record = IntakeRecord {
        title: "Demo".to_string(),
        business_problem: Some("Too much manual triage".to_string()),
        use_case_type: Some(UseCaseType::Automation),
        problem_category: Some(ProblemCategory::RepetitiveTasks),
        files: vec![Attachment::new("plan.pdf", 1024)],
        ..IntakeRecord::new()
    };

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["title"], "Demo");
    assert_eq!(json["businessProblem"], "Too much manual triage");
    assert_eq!(json["useCaseType"], "automation");
    assert_eq!(json["problemCategory"], "repetitive-tasks");
    assert_eq!(json["team"], serde_json::Value::Null);
    assert_eq!(json["files"][0]["fileName"], "plan.pdf");
    assert_eq!(json["files"][0]["sizeBytes"], 1024);
}

#[test]
fn test_deserializes_with_missing_fields() {
    let record: IntakeRecord = serde_json::from_str(r#"{"title":"Demo"}"#).unwrap();

    assert_eq!(record.title, "Demo");
    assert_eq!(record.team, None);
    assert_eq!(record.use_case_type, None);
    assert!(record.files.is_empty());
}

#[test]
fn test_is_submittable_requires_title() {
    let mut record = IntakeRecord::new();
    assert!(!record.is_submittable());

    record.title = "   ".to_string();
    assert!(!record.is_submittable());

    record.title = "Demo".to_string();
    assert!(record.is_submittable());
}

#[test]
fn test_active_section_is_derived() {
    let mut record = IntakeRecord::new();
    assert_eq!(record.active_section(), None);

    record.use_case_type = Some(UseCaseType::Automation);
    assert_eq!(record.active_section(), Some(ConditionalSection::Automation));

    record.use_case_type = Some(UseCaseType::Coding);
    assert_eq!(record.active_section(), None);
}
