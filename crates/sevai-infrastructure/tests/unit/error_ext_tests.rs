//! Error Extension Tests

use sevai_domain::error::{Error, Result};
use sevai_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read data/finetune_QA.json");

    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read data/finetune_QA.json"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context_maps_to_configuration() {
    let parse_error = "x".parse::<u32>().unwrap_err();
    let result: Result<u32> = Err(parse_error).config_context("bad top_k");
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_lazy_context_is_internal() {
    let result: Result<()> =
        Err(io::Error::other("boom")).with_context(|| format!("step {}", 3));
    match result {
        Err(Error::Internal { message }) => assert_eq!(message, "step 3: boom"),
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_ok_passes_through() {
    let result: Result<u8> = Ok::<u8, io::Error>(1).context("unused");
    assert_eq!(result.unwrap(), 1);
}
