//! Unit tests for source record deserialization

use serde_json::json;
use sevai_domain::entities::{RecordKind, SourceRecord};
use sevai_domain::Language;

#[test]
fn test_scheme_record_with_extra_fields() {
    let record: SourceRecord = serde_json::from_value(json!({
        "kind": "scheme",
        "scheme_name": "Pudhumai Penn",
        "benefits": "Rs. 1000 per month",
        "documents": ["Aadhaar", "School certificate"],
        "helpline": "14417"
    }))
    .unwrap();

    let SourceRecord::Scheme(scheme) = record else {
        panic!("Expected scheme record");
    };
    assert_eq!(scheme.name.as_deref(), Some("Pudhumai Penn"));
    assert_eq!(scheme.documents.len(), 2);
    assert_eq!(scheme.extra.get("helpline"), Some(&json!("14417")));
    assert!(!scheme.extra.contains_key("kind"));
}

#[test]
fn test_qa_record_alias_and_language() {
    let record: SourceRecord = serde_json::from_value(json!({
        "kind": "qa_pair",
        "question": "மகளிர் உரிமைத் தொகை எவ்வளவு?",
        "answer": "மாதம் ரூ.1000",
        "language": "tamil"
    }))
    .unwrap();

    assert_eq!(record.kind(), RecordKind::Qa);
    let SourceRecord::Qa(qa) = record else {
        panic!("Expected qa record");
    };
    assert_eq!(qa.language, Some(Language::Tamil));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result = serde_json::from_value::<SourceRecord>(json!({
        "kind": "news",
        "title": "Budget"
    }));
    assert!(result.is_err());
}

#[test]
fn test_missing_kind_is_rejected() {
    let result = serde_json::from_value::<SourceRecord>(json!({"name": "Anything"}));
    assert!(result.is_err());
}

#[test]
fn test_department_without_name_still_deserializes() {
    let record: SourceRecord =
        serde_json::from_value(json!({"kind": "department", "contact": "044-1234"})).unwrap();
    let SourceRecord::Department(department) = record else {
        panic!("Expected department record");
    };
    assert!(department.name.is_none());
    assert_eq!(department.contact.as_deref(), Some("044-1234"));
}

#[test]
fn test_loose_field_types_deserialize() {
    let record: SourceRecord = serde_json::from_value(json!({
        "kind": "service",
        "name": "Birth certificate",
        "fees": 50,
        "timeline": null,
        "procedure": ["Apply online", "Visit the taluk office"]
    }))
    .unwrap();
    let SourceRecord::Service(service) = record else {
        panic!("Expected service record");
    };
    assert_eq!(service.fees.as_deref(), Some("50"));
    assert!(service.timeline.is_none());
    assert_eq!(
        service.procedure.as_deref(),
        Some("Apply online, Visit the taluk office")
    );

    let record: SourceRecord = serde_json::from_value(json!({
        "kind": "scheme",
        "name": "Pudhumai Penn",
        "documents": "Aadhaar card"
    }))
    .unwrap();
    let SourceRecord::Scheme(scheme) = record else {
        panic!("Expected scheme record");
    };
    assert_eq!(scheme.documents, vec!["Aadhaar card".to_string()]);
}
