//! Ingestion source configuration

use crate::constants::DEFAULT_DATA_DIR;
use serde::{Deserialize, Serialize};
use sevai_domain::entities::RecordKind;
use std::path::{Path, PathBuf};

/// One JSON corpus file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File path
    pub path: PathBuf,
    /// Kind applied to objects without a `kind` field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RecordKind>,
}

impl SourceConfig {
    /// Source with a default kind
    pub fn new(path: impl Into<PathBuf>, kind: Option<RecordKind>) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Corpus sources indexed by `sevai ingest`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Files to ingest, in order
    pub sources: Vec<SourceConfig>,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        let data = Path::new(DEFAULT_DATA_DIR);
        Self {
            sources: vec![
                SourceConfig::new(data.join("finetune_QA.json"), Some(RecordKind::Qa)),
                SourceConfig::new(
                    data.join("processed_rag_dept.json"),
                    Some(RecordKind::Department),
                ),
                SourceConfig::new(
                    data.join("processed_rag_services.json"),
                    Some(RecordKind::Service),
                ),
                SourceConfig::new(data.join("rag_new_scheme.json"), Some(RecordKind::Scheme)),
                SourceConfig::new(data.join("tamil_scheme_data.json"), Some(RecordKind::Scheme)),
            ],
        }
    }
}
