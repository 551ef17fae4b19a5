//! Test doubles and fixtures shared by the application tests
//!
//! Real providers (hashing embeddings, in-memory store) are used wherever
//! possible; the fakes below only add call counting and failure injection.

use async_trait::async_trait;
use serde_json::json;
use sevai_application::RetryPolicy;
use sevai_domain::entities::RawRecord;
use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::{CompletionProvider, EmbeddingProvider};
use sevai_domain::value_objects::{Embedding, GenerationParams, Prompt};
use sevai_providers::embedding::HashingEmbeddingProvider;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Retry policy with no real waiting
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(Duration::from_secs(5), Duration::from_millis(1))
}

/// Hashing embeddings that count calls and can fail on chosen calls
pub struct CountingEmbeddingProvider {
    inner: HashingEmbeddingProvider,
    calls: AtomicUsize,
    failures: Mutex<VecDeque<Error>>,
    fail_from_call: Option<usize>,
}

impl CountingEmbeddingProvider {
    /// Never fails
    pub fn new() -> Self {
        Self {
            inner: HashingEmbeddingProvider::new(),
            calls: AtomicUsize::new(0),
            failures: Mutex::new(VecDeque::new()),
            fail_from_call: None,
        }
    }

    /// Fails the first calls with the given errors, then succeeds
    pub fn failing_first(errors: Vec<Error>) -> Self {
        Self {
            failures: Mutex::new(errors.into()),
            ..Self::new()
        }
    }

    /// Succeeds for `n` calls, then is unavailable forever
    pub fn down_after(n: usize) -> Self {
        Self {
            fail_from_call: Some(n),
            ..Self::new()
        }
    }

    /// Number of embed_batch calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for CountingEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        if self.fail_from_call.is_some_and(|n| call >= n) {
            return Err(Error::embedding_unavailable("embedding service down"));
        }
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

/// Completion backend returning scripted results and recording prompts
pub struct ScriptedCompletionProvider {
    replies: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedCompletionProvider {
    /// Replies are consumed in order; once exhausted every call says "ok"
    pub fn new(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletionProvider {
    async fn complete(&self, prompt: &Prompt, _params: &GenerationParams) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("ok".to_string()))
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }
}

/// A small bilingual corpus in raw record form
pub fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new(
            "rag_new_scheme.json",
            0,
            json!({
                "kind": "scheme",
                "name": "Scheme X",
                "department": "Transport Department",
                "description": "Scheme X provides free bus travel for women",
                "eligibility": "All women residents of Tamil Nadu",
                "language": "en"
            }),
        ),
        RawRecord::new(
            "rag_new_scheme.json",
            1,
            json!({
                "kind": "scheme",
                "name": "Pudhumai Penn",
                "department": "Social Welfare Department",
                "benefits": "Rs. 1000 monthly assistance for girl students in higher education",
                "language": "en"
            }),
        ),
        RawRecord::new(
            "processed_rag_services.json",
            0,
            json!({
                "kind": "service",
                "name": "Birth certificate",
                "department": "Revenue Department",
                "procedure": "Apply at the municipal office with hospital records",
                "fees": "Rs. 20"
            }),
        ),
        RawRecord::new(
            "finetune_QA.json",
            0,
            json!({
                "kind": "qa",
                "question_en": "How much is the Magalir Urimai Thogai?",
                "answer_en": "Eligible women receive Rs. 1000 every month.",
                "question_ta": "மகளிர் உரிமைத் தொகை எவ்வளவு?",
                "answer_ta": "தகுதியான மகளிருக்கு மாதம் ரூ.1000 வழங்கப்படுகிறது.",
                "scheme_name": "Magalir Urimai Thogai"
            }),
        ),
    ]
}

/// Collection used by the pipeline tests
pub const COLLECTION: &str = "schemes";

/// In-memory store with the sample corpus indexed under [`COLLECTION`]
pub async fn indexed_store(
    embedder: std::sync::Arc<dyn EmbeddingProvider>,
) -> std::sync::Arc<sevai_providers::vector_store::InMemoryVectorStoreProvider> {
    use sevai_application::{IndexingServiceImpl, IndexingServiceInterface};

    let store = std::sync::Arc::new(
        sevai_providers::vector_store::InMemoryVectorStoreProvider::new(),
    );
    IndexingServiceImpl::new(embedder, store.clone(), fast_retry())
        .ingest_records(COLLECTION, &sample_records())
        .await
        .expect("sample corpus indexes");
    store
}
