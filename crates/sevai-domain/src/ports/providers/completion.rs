use crate::error::Result;
use crate::value_objects::{GenerationParams, Prompt};
use async_trait::async_trait;

/// Response Generation Interface
///
/// Sends an assembled prompt to a language-model backend and returns the
/// generated text. Failure classes map onto the domain errors:
///
/// - unreachable, timed out, rate limited, 5xx: `CompletionServiceUnavailable`
/// - content policy: `CompletionRejected`
/// - rejected credentials: `Authentication`
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a response for the prompt
    async fn complete(&self, prompt: &Prompt, params: &GenerationParams) -> Result<String>;

    /// Provider identifier (e.g. "openai")
    fn provider_name(&self) -> &str;

    /// Model the provider sends requests to
    fn model(&self) -> &str;
}
