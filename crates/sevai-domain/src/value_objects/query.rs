//! Query Value Object

use serde::{Deserialize, Serialize};

use super::Language;

/// A user question for a single turn
///
/// `text` is already trimmed and bounded by the answer pipeline; `language`
/// is the detected language the answer must be written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Literal query text
    pub text: String,
    /// Language the query is written in
    pub language: Language,
}

impl Query {
    /// Create a query
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }
}
