//! Completion provider implementations
//!
//! Implements `CompletionProvider` for OpenAI-compatible chat APIs
//! (OpenRouter by default).

#[cfg(feature = "completion-openai")]
pub mod openai;

#[cfg(feature = "completion-openai")]
pub use openai::{Attribution, OpenAICompletionProvider};
