//! Generation Value Objects

use serde::{Deserialize, Serialize};

use super::Language;
use crate::constants::{GENERATION_DEFAULT_MAX_TOKENS, GENERATION_DEFAULT_TEMPERATURE};

/// Sampling parameters passed to the completion backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Completion token cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: GENERATION_DEFAULT_MAX_TOKENS,
            temperature: GENERATION_DEFAULT_TEMPERATURE,
        }
    }
}

/// Final answer for one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Generated text
    pub text: String,
    /// Language the answer was requested in
    pub language: Language,
    /// Ids of the chunks placed in the prompt
    pub sources: Vec<String>,
    /// Whether any retrieved context backed the answer
    pub used_context: bool,
}
