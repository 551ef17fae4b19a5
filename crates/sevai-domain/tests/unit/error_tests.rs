//! Unit tests for domain error types

use sevai_domain::Error;

#[test]
fn test_malformed_record_error() {
    let error = Error::malformed_record("tamil_scheme_data.json", 4, "missing name");
    match &error {
        Error::MalformedRecord {
            source_name,
            position,
            reason,
        } => {
            assert_eq!(source_name, "tamil_scheme_data.json");
            assert_eq!(*position, 4);
            assert_eq!(reason, "missing name");
        }
        _ => panic!("Expected MalformedRecord error"),
    }
    assert_eq!(
        error.to_string(),
        "Malformed record #4 in tamil_scheme_data.json: missing name"
    );
}

#[test]
fn test_query_too_long_display() {
    let error = Error::QueryTooLong {
        length: 2500,
        max: 2000,
    };
    assert_eq!(
        error.to_string(),
        "Query too long: 2500 characters (maximum 2000)"
    );
}

#[test]
fn test_service_errors_are_transient() {
    assert!(Error::embedding_unavailable("timeout").is_transient());
    assert!(Error::completion_unavailable("HTTP 503").is_transient());
}

#[test]
fn test_final_errors_are_not_transient() {
    assert!(!Error::authentication("bad key").is_transient());
    assert!(!Error::completion_rejected("content_filter").is_transient());
    assert!(!Error::invalid_argument("empty query").is_transient());
    assert!(!Error::malformed_record("a.json", 0, "no kind").is_transient());
    assert!(!Error::QueryTooLong { length: 3, max: 2 }.is_transient());
}

#[test]
fn test_error_with_source_keeps_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "socket timed out");
    let error = Error::embedding_unavailable_with_source("request failed", io);
    let source = std::error::Error::source(&error).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("socket timed out"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = parse.into();
    assert!(matches!(error, Error::Json { .. }));
}
