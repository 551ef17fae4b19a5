//! Prompt Value Object

use serde::{Deserialize, Serialize};

use super::Language;

/// Assembled input for the completion backend
///
/// The instruction and context travel as the system message, the query as
/// the user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Role, bilingual rules and target-language directive
    pub instruction: String,
    /// Rendered context block, empty when nothing was retrieved
    pub context: String,
    /// Literal user query
    pub query: String,
    /// Language the answer must be written in
    pub language: Language,
    /// Ids of the chunks rendered into `context`, in order
    pub included_chunk_ids: Vec<String>,
}

impl Prompt {
    /// System message: instruction followed by the context block
    pub fn system_message(&self) -> String {
        if self.context.is_empty() {
            self.instruction.clone()
        } else {
            format!("{}\n\n{}", self.instruction, self.context)
        }
    }

    /// Full prompt as a single text
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.system_message(), self.query)
    }

    /// Length of [`Prompt::render`] in characters
    pub fn len_chars(&self) -> usize {
        self.render().chars().count()
    }
}
