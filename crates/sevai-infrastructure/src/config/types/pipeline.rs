//! Retrieval, prompt, generation and resilience settings

use crate::constants::RETRY_BACKOFF_MS;
use serde::{Deserialize, Serialize};
use sevai_domain::constants::{
    GENERATION_DEFAULT_MAX_TOKENS, GENERATION_DEFAULT_TEMPERATURE, PROMPT_DEFAULT_BUDGET_CHARS,
    QUERY_MAX_CHARS, RETRIEVAL_DEFAULT_THRESHOLD, RETRIEVAL_DEFAULT_TOP_K,
};

/// Retrieval configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Chunks retrieved per question
    pub top_k: usize,
    /// Minimum cosine similarity, in [-1, 1]
    pub relevance_threshold: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: RETRIEVAL_DEFAULT_TOP_K,
            relevance_threshold: RETRIEVAL_DEFAULT_THRESHOLD,
        }
    }
}

/// Prompt configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Upper bound of the rendered prompt, in characters
    pub budget_chars: usize,
    /// Longest accepted question, in characters
    pub max_query_chars: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            budget_chars: PROMPT_DEFAULT_BUDGET_CHARS,
            max_query_chars: QUERY_MAX_CHARS,
        }
    }
}

/// Completion sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Completion token cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: GENERATION_DEFAULT_MAX_TOKENS,
            temperature: GENERATION_DEFAULT_TEMPERATURE,
        }
    }
}

/// Retry settings shared by embedding and completion calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResilienceConfig {
    /// Pause before the single retry, in milliseconds
    pub retry_backoff_ms: u64,
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            retry_backoff_ms: RETRY_BACKOFF_MS,
        }
    }
}
