//! Hashing Embedding Provider
//!
//! Deterministic, offline embeddings: a signed feature-hashed bag of words
//! over Unicode word boundaries. Works for English and Tamil text alike and
//! needs no network or model files, which makes it the default for local
//! runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::EmbeddingProvider;
use sevai_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_HASHING, EMBEDDING_MODEL_HASHING};

/// Lowercased Unicode words of a text
fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_lowercase).collect()
}

/// Feature-hashing embedding provider
///
/// Each token is hashed with seahash; the low bits pick a dimension and the
/// top bit picks the sign. Term frequencies are dampened with `1 + ln(tf)`
/// and the vector is L2-normalized. Text without words embeds to the zero
/// vector, which scores `0.0` against everything.
///
/// ## Example
///
/// ```rust
/// use sevai_providers::embedding::HashingEmbeddingProvider;
/// use sevai_domain::ports::providers::EmbeddingProvider;
///
/// let provider = HashingEmbeddingProvider::new();
/// let v = provider.embed_text("free bus travel for women");
/// assert_eq!(v.len(), provider.dimensions());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HashingEmbeddingProvider {
    dimensions: usize,
}

impl HashingEmbeddingProvider {
    /// Provider with the default 384 dimensions
    pub fn new() -> Self {
        Self {
            dimensions: EMBEDDING_DIMENSION_HASHING,
        }
    }

    /// Provider with custom dimensions
    pub fn with_dimensions(dimensions: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::invalid_argument(
                "hashing embedding dimensions must be greater than zero",
            ));
        }
        Ok(Self { dimensions })
    }

    /// Embed a single text synchronously
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut vector = vec![0.0_f32; self.dimensions];
        for (token, tf) in counts {
            let hash = seahash::hash(token.as_bytes());
            let index = (hash % self.dimensions as u64) as usize;
            let sign = if hash >> 63 == 1 { -1.0 } else { 1.0 };
            vector[index] += sign * (1.0 + (tf as f32).ln());
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

impl Default for HashingEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for HashingEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(self.embed_text(text), EMBEDDING_MODEL_HASHING))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "hashing"
    }
}
