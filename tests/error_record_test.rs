use mishap::{ErrorRecord, Model};
use serde_json::json;

#[test]
fn test_round_trip_preserves_message() {
    for message in ["Error message", "boom", "日本語のエラー", "  spaced  "] {
        let record = ErrorRecord::from_value(&json!({ "message": message }))
            .into_result()
            .unwrap();
        assert_eq!(record.message(), message);
    }
}

#[test]
fn test_missing_message_is_rejected() {
    let result = ErrorRecord::from_value(&json!({}));
    assert!(result.is_failure());

    let errors = result.into_result().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().field.as_deref(), Some("message"));
    assert_eq!(errors.first().code(), "required");
}

#[test]
fn test_non_string_message_is_rejected() {
    for payload in [
        json!({"message": 123}),
        json!({"message": 1.5}),
        json!({"message": true}),
        json!({"message": ["a"]}),
        json!({"message": {"nested": "object"}}),
    ] {
        let result = ErrorRecord::from_value(&payload);
        assert!(result.is_failure(), "accepted {}", payload);

        let errors = result.into_result().unwrap_err();
        assert_eq!(errors.first().field.as_deref(), Some("message"));
        assert_eq!(errors.first().code(), "invalid_type");
    }
}

#[test]
fn test_null_message_is_rejected_as_wrong_type() {
    let errors = ErrorRecord::from_value(&json!({"message": null}))
        .into_result()
        .unwrap_err();

    assert_eq!(errors.first().field.as_deref(), Some("message"));
    assert_eq!(errors.first().code(), "invalid_type");
    assert!(errors.first().to_string().contains("expected string"));
    assert!(errors.first().to_string().contains("got null"));
}

#[test]
fn test_empty_message_is_accepted() {
    let record = ErrorRecord::from_value(&json!({"message": ""}))
        .into_result()
        .unwrap();
    assert_eq!(record.message(), "");
}

#[test]
fn test_canonical_message() {
    let record = ErrorRecord::from_value(&json!({"message": "Error message"}))
        .into_result()
        .unwrap();
    assert_eq!(record.message(), "Error message");
}

#[test]
fn test_non_object_payload_is_rejected() {
    for payload in [json!("just a string"), json!(42), json!(null), json!([])] {
        let errors = ErrorRecord::from_value(&payload)
            .into_result()
            .unwrap_err();
        assert!(errors.first().field.is_none());
        assert_eq!(errors.first().code(), "invalid_type");
    }
}

#[test]
fn test_unknown_fields_are_ignored() {
    let record = ErrorRecord::from_value(&json!({"message": "boom", "severity": "high"}))
        .into_result()
        .unwrap();
    assert_eq!(record.message(), "boom");
    assert_eq!(record.to_value(), json!({"message": "boom"}));
}

#[test]
fn test_describe_schema_contents() {
    let description = ErrorRecord::describe_schema();

    assert_eq!(description["type"], "object");
    assert_eq!(description["properties"]["message"]["type"], "string");
    assert_eq!(description["properties"]["message"]["required"], true);
    assert_eq!(description["properties"]["message"]["title"], "Message");
    assert_eq!(
        description["properties"]["message"]["description"],
        "Error message"
    );
    assert_eq!(description["example"], json!({"message": "Error message"}));
}

#[test]
fn test_schema_example_is_self_consistent() {
    // The published example must never disagree with the validator.
    let example = ErrorRecord::describe_schema()["example"].clone();
    let result = ErrorRecord::from_value(&example);
    assert!(result.is_success());
    assert_eq!(
        result.into_result().unwrap().message(),
        "Error message"
    );
}

#[test]
fn test_typed_construction_matches_untyped() {
    let typed = ErrorRecord::new("boom");
    let untyped = ErrorRecord::from_value(&json!({"message": "boom"}))
        .into_result()
        .unwrap();
    assert_eq!(typed, untyped);
}

#[test]
fn test_records_compare_by_message() {
    assert_eq!(ErrorRecord::new("a"), ErrorRecord::new("a"));
    assert_ne!(ErrorRecord::new("a"), ErrorRecord::new("b"));
}

#[test]
fn test_to_value_validates_against_schema() {
    let record = ErrorRecord::new("round trip");
    assert!(ErrorRecord::schema().validate(&record.to_value()).is_success());
}

#[test]
fn test_clone_is_independent() {
    // The public surface exposes no mutation; a clone can only ever observe
    // the same message as its source.
    let record = ErrorRecord::new("immutable");
    let cloned = record.clone();
    assert_eq!(record.message(), cloned.message());
}
