use crate::id::id_source::SUFFIX_LEN;
use crate::{CoreError, IdSource, ProjectId, SystemIdSource};

/// Deterministic source for asserting exact formatting
struct FixedIdSource {
    millis: i64,
    suffix: &'static str,
}

impl IdSource for FixedIdSource {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn random_suffix(&self) -> String {
        self.suffix.to_string()
    }
}

#[test]
fn test_generate_exact_format() {
    let source = FixedIdSource {
        millis: 1700000000000,
        suffix: "a1b2c3d4e",
    };

    let id = ProjectId::generate(&source);
    assert_eq!(id.as_str(), "PROJ-1700000000000-a1b2c3d4e");
}

#[test]
fn test_generated_id_parses_back() {
    let id = ProjectId::generate(&SystemIdSource);
    let reparsed: ProjectId = id.as_str().parse().unwrap();
    assert_eq!(reparsed, id);
}

#[test]
fn test_system_source_suffix_shape() {
    let suffix = SystemIdSource.random_suffix();
    assert_eq!(suffix.len(), SUFFIX_LEN);
    assert!(
        suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    );
}

#[test]
fn test_two_generated_ids_differ() {
    // Birthday bound over 36^9 suffixes per millisecond
    let a = ProjectId::generate(&SystemIdSource);
    let b = ProjectId::generate(&SystemIdSource);
    assert_ne!(a, b);
}

#[test]
fn test_parse_rejects_malformed() {
    let bad = [
        "",
        "PROJ",
        "PROJ-1700000000000",
        "TASK-1700000000000-a1b2c3d4e",
        "PROJ--a1b2c3d4e",
        "PROJ-17000x0000-a1b2c3d4e",
        "PROJ-1700000000000-short",
        "PROJ-1700000000000-A1B2C3D4E",
        "PROJ-1700000000000-a1b2c3d4e0",
    ];

    for value in bad {
        let err = value.parse::<ProjectId>().unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidProjectId { .. }),
            "expected InvalidProjectId for {value:?}"
        );
    }
}

#[test]
fn test_serde_transparent() {
    let id: ProjectId = "PROJ-1700000000000-a1b2c3d4e".parse().unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"PROJ-1700000000000-a1b2c3d4e\"");
}
