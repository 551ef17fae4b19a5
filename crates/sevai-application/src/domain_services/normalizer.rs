//! Document Normalization Domain Service
//!
//! Turns structured corpus records into retrievable chunks. Each record shape
//! has a fixed rendering; fields the shape does not model are appended as
//! `key: value` lines so no source value is lost.

use serde_json::Value;
use sevai_domain::entities::{
    Chunk, ChunkMetadata, DepartmentRecord, ExtraFields, QaRecord, RawRecord, RecordKind,
    SchemeRecord, ServiceRecord, SourceRecord, stable_chunk_id,
};
use sevai_domain::error::{Error, Result};
use sevai_domain::value_objects::Language;
use std::fmt;
use tracing::{debug, warn};

use super::language::detect;

/// A record the normalizer rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Source the record came from
    pub source_name: String,
    /// Position inside the source
    pub position: usize,
    /// Why it was rejected
    pub reason: String,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record #{} in {}: {}",
            self.position, self.source_name, self.reason
        )
    }
}

/// Outcome of normalizing a batch of records
#[derive(Debug, Clone, Default)]
pub struct NormalizationReport {
    /// Chunks produced, in record order
    pub chunks: Vec<Chunk>,
    /// Rejected records
    pub skipped: Vec<SkippedRecord>,
    /// Records examined
    pub records_seen: usize,
}

impl NormalizationReport {
    /// Number of records that produced at least one chunk
    pub fn records_accepted(&self) -> usize {
        self.records_seen - self.skipped.len()
    }
}

/// Accumulates `Label: value` lines for a chunk text
#[derive(Default)]
struct TextBuilder {
    lines: Vec<String>,
}

impl TextBuilder {
    fn field(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = non_blank(value) {
            self.lines.push(format!("{label}: {value}"));
        }
        self
    }

    fn list(&mut self, label: &str, values: &[String]) -> &mut Self {
        let items: Vec<&str> = values
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .collect();
        if !items.is_empty() {
            self.lines.push(format!("{label}: {}", items.join(", ")));
        }
        self
    }

    fn extra(&mut self, extra: &ExtraFields) -> &mut Self {
        for (key, value) in extra {
            if let Some(rendered) = render_value(value) {
                self.lines.push(format!("{key}: {rendered}"));
            }
        }
        self
    }

    fn build(&self) -> String {
        self.lines.join("\n")
    }
}

/// Trimmed value, or `None` when absent or blank
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Render an unmodelled JSON value as text; `None` for null and empty values
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => non_blank(Some(s)).map(str::to_string),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render_value).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(map) if map.is_empty() => None,
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Required name field, or a malformed-record error
fn required_name<'a>(
    name: Option<&'a str>,
    source_name: &str,
    position: usize,
) -> Result<&'a str> {
    non_blank(name).ok_or_else(|| {
        Error::malformed_record(source_name, position, "missing required field `name`")
    })
}

fn owned(value: Option<&str>) -> Option<String> {
    non_blank(value).map(str::to_string)
}

/// Stateless record normalizer
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentNormalizer;

impl DocumentNormalizer {
    /// Create a normalizer
    pub fn new() -> Self {
        Self
    }

    /// Normalize one raw record into chunks
    ///
    /// Unknown or missing `kind`, missing required fields and incomplete
    /// Q&A records are reported as `MalformedRecord`.
    pub fn normalize(&self, raw: &RawRecord) -> Result<Vec<Chunk>> {
        let record: SourceRecord = serde_json::from_value(raw.value.clone()).map_err(|e| {
            Error::malformed_record(&raw.source_name, raw.position, e.to_string())
        })?;
        self.normalize_record(&record, &raw.source_name, raw.position)
    }

    /// Normalize an already dispatched record
    pub fn normalize_record(
        &self,
        record: &SourceRecord,
        source_name: &str,
        position: usize,
    ) -> Result<Vec<Chunk>> {
        match record {
            SourceRecord::Department(r) => {
                Self::department(r, source_name, position).map(|c| vec![c])
            }
            SourceRecord::Scheme(r) => Self::scheme(r, source_name, position).map(|c| vec![c]),
            SourceRecord::Service(r) => Self::service(r, source_name, position).map(|c| vec![c]),
            SourceRecord::Qa(r) => Self::qa(r, source_name, position),
        }
    }

    /// Normalize a batch, skipping malformed records
    pub fn normalize_batch(&self, records: &[RawRecord]) -> NormalizationReport {
        let mut report = NormalizationReport {
            records_seen: records.len(),
            ..NormalizationReport::default()
        };

        for raw in records {
            match self.normalize(raw) {
                Ok(chunks) => report.chunks.extend(chunks),
                Err(Error::MalformedRecord {
                    source_name,
                    position,
                    reason,
                }) => {
                    warn!(
                        source = %source_name,
                        position,
                        reason = %reason,
                        "Skipping malformed record"
                    );
                    report.skipped.push(SkippedRecord {
                        source_name,
                        position,
                        reason,
                    });
                }
                Err(other) => {
                    warn!(source = %raw.source_name, position = raw.position, error = %other, "Skipping record");
                    report.skipped.push(SkippedRecord {
                        source_name: raw.source_name.clone(),
                        position: raw.position,
                        reason: other.to_string(),
                    });
                }
            }
        }

        debug!(
            records = report.records_seen,
            chunks = report.chunks.len(),
            skipped = report.skipped.len(),
            "Normalized record batch"
        );
        report
    }

    fn finish(
        kind: RecordKind,
        explicit: Option<Language>,
        text: String,
        source_name: &str,
        identity: &str,
        fill: impl FnOnce(&mut ChunkMetadata),
    ) -> Chunk {
        let language = explicit.unwrap_or_else(|| detect(&text));
        let mut metadata = ChunkMetadata::new(kind, language);
        metadata.source_file = Some(source_name.to_string());
        fill(&mut metadata);
        let id = stable_chunk_id(kind, language, &[source_name, identity]);
        Chunk::new(id, text, metadata)
    }

    fn department(r: &DepartmentRecord, source_name: &str, position: usize) -> Result<Chunk> {
        let name = required_name(r.name.as_deref(), source_name, position)?;
        let text = TextBuilder::default()
            .field("Department", Some(name))
            .field("Description", r.description.as_deref())
            .field("Contact", r.contact.as_deref())
            .field("Website", r.website.as_deref())
            .list("Services", &r.services)
            .extra(&r.extra)
            .build();
        Ok(Self::finish(
            RecordKind::Department,
            r.language,
            text,
            source_name,
            name,
            |m| m.department = Some(name.to_string()),
        ))
    }

    fn scheme(r: &SchemeRecord, source_name: &str, position: usize) -> Result<Chunk> {
        let name = required_name(r.name.as_deref(), source_name, position)?;
        let text = TextBuilder::default()
            .field("Scheme", Some(name))
            .field("Department", r.department.as_deref())
            .field("Description", r.description.as_deref())
            .field("Eligibility", r.eligibility.as_deref())
            .field("Benefits", r.benefits.as_deref())
            .field("How to apply", r.how_to_apply.as_deref())
            .list("Documents required", &r.documents)
            .extra(&r.extra)
            .build();
        Ok(Self::finish(
            RecordKind::Scheme,
            r.language,
            text,
            source_name,
            name,
            |m| {
                m.scheme_name = Some(name.to_string());
                m.department = owned(r.department.as_deref());
            },
        ))
    }

    fn service(r: &ServiceRecord, source_name: &str, position: usize) -> Result<Chunk> {
        let name = required_name(r.name.as_deref(), source_name, position)?;
        let text = TextBuilder::default()
            .field("Service", Some(name))
            .field("Department", r.department.as_deref())
            .field("Description", r.description.as_deref())
            .field("Procedure", r.procedure.as_deref())
            .field("Fees", r.fees.as_deref())
            .field("Timeline", r.timeline.as_deref())
            .extra(&r.extra)
            .build();
        Ok(Self::finish(
            RecordKind::Service,
            r.language,
            text,
            source_name,
            name,
            |m| {
                m.scheme_name = Some(name.to_string());
                m.department = owned(r.department.as_deref());
            },
        ))
    }

    fn qa(r: &QaRecord, source_name: &str, position: usize) -> Result<Vec<Chunk>> {
        let pairs = [
            (
                r.question_en.as_deref(),
                r.answer_en.as_deref(),
                Some(Language::English),
            ),
            (
                r.question_ta.as_deref(),
                r.answer_ta.as_deref(),
                Some(Language::Tamil),
            ),
            (r.question.as_deref(), r.answer.as_deref(), r.language),
        ];

        let chunks: Vec<Chunk> = pairs
            .into_iter()
            .filter_map(|(question, answer, language)| {
                let question = non_blank(question)?;
                let answer = non_blank(answer)?;
                Some((question, answer, language))
            })
            .map(|(question, answer, language)| {
                let text = TextBuilder::default()
                    .field("Question", Some(question))
                    .field("Answer", Some(answer))
                    .field("Scheme", r.scheme_name.as_deref())
                    .field("Department", r.department.as_deref())
                    .extra(&r.extra)
                    .build();
                Self::finish(RecordKind::Qa, language, text, source_name, question, |m| {
                    m.question = Some(question.to_string());
                    m.scheme_name = owned(r.scheme_name.as_deref());
                    m.department = owned(r.department.as_deref());
                })
            })
            .collect();

        if chunks.is_empty() {
            return Err(Error::malformed_record(
                source_name,
                position,
                "no complete question/answer pair",
            ));
        }
        Ok(chunks)
    }
}
