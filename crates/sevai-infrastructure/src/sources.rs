//! JSON corpus loading
//!
//! A source file holds either an array of objects or a single object. When
//! the source declares a default kind, objects without a `kind` field get it
//! injected before shape dispatch.

use crate::config::SourceConfig;
use crate::error_ext::ErrorContext;
use serde_json::Value;
use sevai_domain::entities::{RawRecord, RecordKind};
use sevai_domain::error::{Error, Result};
use std::path::Path;
use tracing::{info, warn};

/// Records loaded from a set of sources
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    /// Records from every readable source, in source order
    pub records: Vec<RawRecord>,
    /// Sources that could not be read or parsed
    pub failures: Vec<String>,
}

/// Name under which records from `path` are reported
fn source_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn with_default_kind(mut value: Value, kind: Option<RecordKind>) -> Value {
    if let (Some(kind), Value::Object(map)) = (kind, &mut value) {
        map.entry("kind")
            .or_insert_with(|| Value::String(kind.as_str().to_string()));
    }
    value
}

/// Split parsed JSON into raw records
pub fn records_from_value(
    name: &str,
    value: Value,
    kind: Option<RecordKind>,
) -> Result<Vec<RawRecord>> {
    let items = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(Error::invalid_argument(format!(
                "{name}: expected a JSON array or object, found {}",
                json_type(&other)
            )));
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(position, item)| RawRecord::new(name, position, with_default_kind(item, kind)))
        .collect())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Loads raw records from JSON source files
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLoader;

impl SourceLoader {
    /// Load one source file
    pub async fn load(source: &SourceConfig) -> Result<Vec<RawRecord>> {
        let content = tokio::fs::read_to_string(&source.path)
            .await
            .io_context(format!("Failed to read {}", source.path.display()))?;
        let name = source_name(&source.path);
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| Error::invalid_argument(format!("{name}: invalid JSON: {e}")))?;
        let records = records_from_value(&name, value, source.kind)?;
        info!(source = %name, records = records.len(), "Loaded source");
        Ok(records)
    }

    /// Load every source, reporting unreadable ones instead of failing
    pub async fn load_all(sources: &[SourceConfig]) -> SourceBatch {
        let mut batch = SourceBatch::default();
        for source in sources {
            match Self::load(source).await {
                Ok(records) => batch.records.extend(records),
                Err(e) => {
                    warn!(path = %source.path.display(), error = %e, "Skipping source");
                    batch.failures.push(e.to_string());
                }
            }
        }
        batch
    }
}
