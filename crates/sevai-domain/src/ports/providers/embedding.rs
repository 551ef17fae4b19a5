use crate::error::{Error, Result};
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text Embedding Interface
///
/// Defines the contract for providers that turn chunk and query text into
/// semantic embeddings. Implementations range from the offline hashing
/// model to OpenAI-compatible HTTP services.
///
/// # Default Implementations
///
/// The `embed()` method has a default implementation that delegates to
/// `embed_batch()` with a single item. Providers only need to implement
/// `embed_batch()` unless custom single-item optimization is needed.
///
/// # Example
///
/// ```ignore
/// use sevai_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("free bus travel for women").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding_unavailable("No embedding returned"))
    }

    /// Get embeddings for multiple texts, one per input in order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of the produced vectors
    fn dimensions(&self) -> usize;

    /// Provider identifier (e.g. "hashing", "openai")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
