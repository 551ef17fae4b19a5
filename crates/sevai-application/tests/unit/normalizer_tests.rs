//! Record normalization

use serde_json::json;
use sevai_application::domain_services::DocumentNormalizer;
use sevai_domain::entities::{RawRecord, RecordKind};
use sevai_domain::error::Error;
use sevai_domain::value_objects::Language;

use super::support::sample_records;

fn raw(value: serde_json::Value) -> RawRecord {
    RawRecord::new("rag_new_scheme.json", 7, value)
}

#[test]
fn test_scheme_text_contains_every_field() {
    let chunks = DocumentNormalizer::new()
        .normalize(&raw(json!({
            "kind": "scheme",
            "scheme_name": "Pudhumai Penn",
            "department": "Social Welfare Department",
            "description": "Support for girl students",
            "eligibility": "Studied in government schools from class 6 to 12",
            "benefits": "Rs. 1000 per month",
            "how_to_apply": "Through the college nodal officer",
            "documents": ["Aadhaar", "Bank passbook"],
            "helpline": "14417"
        })))
        .expect("valid scheme");

    assert_eq!(chunks.len(), 1);
    let chunk = &chunks[0];
    for expected in [
        "Scheme: Pudhumai Penn",
        "Department: Social Welfare Department",
        "Description: Support for girl students",
        "Eligibility: Studied in government schools from class 6 to 12",
        "Benefits: Rs. 1000 per month",
        "How to apply: Through the college nodal officer",
        "Documents required: Aadhaar, Bank passbook",
        "helpline: 14417",
    ] {
        assert!(chunk.text.contains(expected), "missing `{expected}` in {}", chunk.text);
    }
    assert_eq!(chunk.metadata.kind, RecordKind::Scheme);
    assert_eq!(chunk.metadata.scheme_name.as_deref(), Some("Pudhumai Penn"));
    assert_eq!(
        chunk.metadata.department.as_deref(),
        Some("Social Welfare Department")
    );
    assert_eq!(
        chunk.metadata.source_file.as_deref(),
        Some("rag_new_scheme.json")
    );
    assert!(chunk.id.starts_with("scheme-en-"));
}

#[test]
fn test_ids_are_stable_across_runs() {
    let normalizer = DocumentNormalizer::new();
    let first = normalizer.normalize_batch(&sample_records());
    let second = normalizer.normalize_batch(&sample_records());
    let ids = |chunks: &[sevai_domain::entities::Chunk]| {
        chunks.iter().map(|c| c.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first.chunks), ids(&second.chunks));
}

#[test]
fn test_bilingual_qa_yields_one_chunk_per_language() {
    let chunks = DocumentNormalizer::new()
        .normalize(&sample_records()[3])
        .expect("valid qa");

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].language(), Language::English);
    assert_eq!(chunks[1].language(), Language::Tamil);
    assert!(chunks[1].text.contains("மகளிர் உரிமைத் தொகை"));
    assert_ne!(chunks[0].id, chunks[1].id);
    assert!(chunks.iter().all(|c| c.metadata.kind == RecordKind::Qa));
}

#[test]
fn test_language_is_detected_when_not_given() {
    let chunks = DocumentNormalizer::new()
        .normalize(&raw(json!({
            "kind": "service",
            "name": "பிறப்புச் சான்றிதழ்",
            "procedure": "நகராட்சி அலுவலகத்தில் விண்ணப்பிக்கவும்"
        })))
        .expect("valid service");
    assert_eq!(chunks[0].language(), Language::Tamil);
}

#[test]
fn test_explicit_language_wins_over_detection() {
    let chunks = DocumentNormalizer::new()
        .normalize(&raw(json!({
            "kind": "department",
            "name": "Transport Department",
            "language": "ta"
        })))
        .expect("valid department");
    assert_eq!(chunks[0].language(), Language::Tamil);
}

#[test]
fn test_numeric_fields_are_kept_as_text() {
    let chunks = DocumentNormalizer::new()
        .normalize(&raw(json!({
            "kind": "service",
            "name": "Birth certificate",
            "fees": 50,
            "timeline": 7,
            "procedure": true
        })))
        .expect("numbers do not reject the record");

    let text = &chunks[0].text;
    assert!(text.contains("Service: Birth certificate"));
    assert!(text.contains("Fees: 50"));
    assert!(text.contains("Timeline: 7"));
    assert!(text.contains("Procedure: true"));
}

#[test]
fn test_null_fields_are_treated_as_absent() {
    let chunks = DocumentNormalizer::new()
        .normalize(&raw(json!({
            "kind": "department",
            "name": "Revenue Department",
            "description": null,
            "services": null
        })))
        .expect("nulls do not reject the record");

    let text = &chunks[0].text;
    assert!(text.contains("Department: Revenue Department"));
    assert!(!text.contains("Description"));
    assert!(!text.contains("Services"));
}

#[test]
fn test_single_string_list_is_accepted() {
    let chunks = DocumentNormalizer::new()
        .normalize(&raw(json!({
            "kind": "scheme",
            "name": "Pudhumai Penn",
            "documents": "Aadhaar card"
        })))
        .expect("string list");
    assert!(chunks[0].text.contains("Documents required: Aadhaar card"));

    let chunks = DocumentNormalizer::new()
        .normalize(&raw(json!({
            "kind": "department",
            "name": "Transport Department",
            "services": ["Bus pass", 42, null]
        })))
        .expect("mixed list");
    assert!(chunks[0].text.contains("Services: Bus pass, 42"));
}

#[test]
fn test_null_name_is_still_malformed() {
    let err = DocumentNormalizer::new()
        .normalize(&raw(json!({ "kind": "scheme", "name": null, "fees": 10 })))
        .expect_err("name is required");
    assert!(matches!(err, Error::MalformedRecord { position: 7, .. }));
}

#[test]
fn test_missing_name_is_malformed() {
    let err = DocumentNormalizer::new()
        .normalize(&raw(json!({ "kind": "scheme", "benefits": "free bus travel" })))
        .expect_err("name is required");
    match err {
        Error::MalformedRecord {
            source_name,
            position,
            reason,
        } => {
            assert_eq!(source_name, "rag_new_scheme.json");
            assert_eq!(position, 7);
            assert!(reason.contains("name"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_kind_is_malformed() {
    let err = DocumentNormalizer::new()
        .normalize(&raw(json!({ "kind": "circular", "name": "G.O. 12" })))
        .expect_err("unknown kind");
    assert!(matches!(err, Error::MalformedRecord { .. }));
}

#[test]
fn test_qa_without_complete_pair_is_malformed() {
    let err = DocumentNormalizer::new()
        .normalize(&raw(json!({ "kind": "qa", "question_en": "Who is eligible?" })))
        .expect_err("no answer");
    assert!(matches!(err, Error::MalformedRecord { .. }));
}

#[test]
fn test_batch_skips_malformed_and_keeps_the_rest() {
    let mut records = sample_records();
    records.push(RawRecord::new("broken.json", 0, json!({ "kind": "scheme" })));
    records.push(RawRecord::new("broken.json", 1, json!("not an object")));

    let report = DocumentNormalizer::new().normalize_batch(&records);

    assert_eq!(report.records_seen, 6);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.records_accepted(), 4);
    assert_eq!(report.chunks.len(), 5);
    assert_eq!(report.skipped[0].position, 0);
    assert!(report.skipped[1].to_string().starts_with("record #1 in broken.json"));
}
