//! Source Record Entities
//!
//! Structured records loaded from the scheme/service corpus. The record shape
//! is chosen by the explicit `kind` discriminator; every shape keeps unknown
//! fields in `extra` so the normalizer can carry them into the chunk text.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::chunk::RecordKind;
use crate::value_objects::Language;

/// Fields not modelled explicitly by a record shape
pub type ExtraFields = BTreeMap<String, Value>;

/// Tolerant field readers
///
/// Corpus files are hand-edited: fees come as numbers, lists as a single
/// string, empty fields as `null`. Scalars are kept as their text so no value
/// is lost, and only a missing required field rejects a record.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Text of a scalar; arrays join their items, objects stay JSON
    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Array(items) => {
                let parts: Vec<String> = items.into_iter().filter_map(scalar_text).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            object @ Value::Object(_) => Some(object.to_string()),
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(scalar_text(Value::deserialize(deserializer)?))
    }

    pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
            other => scalar_text(other).into_iter().collect(),
        })
    }
}

/// Government department record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    /// Department name (required)
    #[serde(
        default,
        alias = "department_name",
        alias = "title",
        deserialize_with = "lenient::text"
    )]
    pub name: Option<String>,
    /// What the department does
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    /// Contact details
    #[serde(default, deserialize_with = "lenient::text")]
    pub contact: Option<String>,
    /// Official website
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: Option<String>,
    /// Services offered
    #[serde(default, deserialize_with = "lenient::list")]
    pub services: Vec<String>,
    /// Explicit language of the record
    #[serde(default)]
    pub language: Option<Language>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Welfare scheme record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecord {
    /// Scheme name (required)
    #[serde(
        default,
        alias = "scheme_name",
        alias = "title",
        deserialize_with = "lenient::text"
    )]
    pub name: Option<String>,
    /// Owning department
    #[serde(default, deserialize_with = "lenient::text")]
    pub department: Option<String>,
    /// Scheme description
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    /// Who can apply
    #[serde(default, deserialize_with = "lenient::text")]
    pub eligibility: Option<String>,
    /// What the scheme provides
    #[serde(default, deserialize_with = "lenient::text")]
    pub benefits: Option<String>,
    /// Application procedure
    #[serde(default, deserialize_with = "lenient::text")]
    pub how_to_apply: Option<String>,
    /// Documents required
    #[serde(default, deserialize_with = "lenient::list")]
    pub documents: Vec<String>,
    /// Explicit language of the record
    #[serde(default)]
    pub language: Option<Language>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Citizen service record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Service name (required)
    #[serde(
        default,
        alias = "service_name",
        alias = "title",
        deserialize_with = "lenient::text"
    )]
    pub name: Option<String>,
    /// Owning department
    #[serde(default, deserialize_with = "lenient::text")]
    pub department: Option<String>,
    /// Service description
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    /// How to obtain the service
    #[serde(default, deserialize_with = "lenient::text")]
    pub procedure: Option<String>,
    /// Applicable fees
    #[serde(default, deserialize_with = "lenient::text")]
    pub fees: Option<String>,
    /// Expected processing time
    #[serde(default, deserialize_with = "lenient::text")]
    pub timeline: Option<String>,
    /// Explicit language of the record
    #[serde(default)]
    pub language: Option<Language>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Question/answer record, optionally bilingual
///
/// Each complete (question, answer) pair yields one chunk: the English pair,
/// the Tamil pair, and the untagged pair whose language comes from
/// `language` or detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaRecord {
    /// English question
    #[serde(default, deserialize_with = "lenient::text")]
    pub question_en: Option<String>,
    /// English answer
    #[serde(default, deserialize_with = "lenient::text")]
    pub answer_en: Option<String>,
    /// Tamil question
    #[serde(default, deserialize_with = "lenient::text")]
    pub question_ta: Option<String>,
    /// Tamil answer
    #[serde(default, deserialize_with = "lenient::text")]
    pub answer_ta: Option<String>,
    /// Question in `language`
    #[serde(default, deserialize_with = "lenient::text")]
    pub question: Option<String>,
    /// Answer in `language`
    #[serde(default, alias = "response", deserialize_with = "lenient::text")]
    pub answer: Option<String>,
    /// Language of the untagged pair
    #[serde(default)]
    pub language: Option<Language>,
    /// Related department
    #[serde(default, deserialize_with = "lenient::text")]
    pub department: Option<String>,
    /// Related scheme
    #[serde(default, deserialize_with = "lenient::text")]
    pub scheme_name: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A structured corpus record, dispatched on the `kind` field
///
/// ```rust
/// use sevai_domain::entities::SourceRecord;
///
/// let record: SourceRecord = serde_json::from_value(serde_json::json!({
///     "kind": "scheme",
///     "name": "Pudhumai Penn",
///     "benefits": "Rs. 1000 per month for girl students",
/// }))
/// .unwrap();
/// assert!(matches!(record, SourceRecord::Scheme(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceRecord {
    /// Department record
    Department(DepartmentRecord),
    /// Scheme record
    Scheme(SchemeRecord),
    /// Service record
    Service(ServiceRecord),
    /// Question/answer record
    #[serde(alias = "qa_pair")]
    Qa(QaRecord),
}

impl SourceRecord {
    /// Record shape
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Department(_) => RecordKind::Department,
            Self::Scheme(_) => RecordKind::Scheme,
            Self::Service(_) => RecordKind::Service,
            Self::Qa(_) => RecordKind::Qa,
        }
    }
}

/// A record as loaded from a source, before shape dispatch
///
/// Keeping the raw JSON lets the normalizer report deserialization failures
/// as per-record `MalformedRecord` errors instead of failing the whole file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// File or logical source the record came from
    pub source_name: String,
    /// Zero-based position inside the source
    pub position: usize,
    /// Undispatched JSON object
    pub value: Value,
}

impl RawRecord {
    /// Create a raw record
    pub fn new(source_name: impl Into<String>, position: usize, value: Value) -> Self {
        Self {
            source_name: source_name.into(),
            position,
            value,
        }
    }
}
