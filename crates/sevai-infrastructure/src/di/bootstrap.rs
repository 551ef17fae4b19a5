//! Composition root
//!
//! Builds every provider and use case from an [`AppConfig`] and keeps them
//! together for the CLI.
//!
//! ```text
//! AppConfig → Factories → Providers (Arc<dyn Port>) → Use cases
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let reply = context.answer_service().respond("Is there free bus travel for women?").await;
//! ```

use crate::config::AppConfig;
use crate::di::factory::{
    CompletionProviderFactory, EmbeddingProviderFactory, VectorStoreProviderFactory, http_client,
};
use sevai_application::domain_services::PromptAssembler;
use sevai_application::ports::services::{
    AnswerServiceInterface, IndexingServiceInterface, RetrievalServiceInterface,
};
use sevai_application::resilience::RetryPolicy;
use sevai_application::use_cases::{
    AnswerServiceImpl, AnswerSettings, IndexingServiceImpl, RetrievalServiceImpl,
};
use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::{CompletionProvider, EmbeddingProvider, VectorStoreProvider};
use sevai_domain::value_objects::GenerationParams;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Retry policies derived from configuration
fn retry_policies(config: &AppConfig) -> (RetryPolicy, RetryPolicy) {
    let backoff = Duration::from_millis(config.resilience.retry_backoff_ms);
    let providers = &config.providers;
    (
        RetryPolicy::new(Duration::from_millis(providers.embedding.timeout_ms), backoff),
        RetryPolicy::new(Duration::from_millis(providers.completion.timeout_ms), backoff),
    )
}

/// Per-turn answer settings derived from configuration
pub fn answer_settings(config: &AppConfig) -> AnswerSettings {
    AnswerSettings {
        top_k: config.retrieval.top_k,
        relevance_threshold: config.retrieval.relevance_threshold,
        max_query_chars: config.prompt.max_query_chars,
        generation: GenerationParams {
            max_tokens: config.generation.max_tokens,
            temperature: config.generation.temperature,
        },
    }
}

/// Application context: configuration, providers and use cases
///
/// The completion provider is optional so that ingestion and statistics
/// work without credentials.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    completion_provider: Option<Arc<dyn CompletionProvider>>,

    indexing_service: Arc<dyn IndexingServiceInterface>,
    retrieval_service: Arc<dyn RetrievalServiceInterface>,
    answer_service: Option<Arc<dyn AnswerServiceInterface>>,
}

impl AppContext {
    /// Assemble a context from already built providers
    pub fn from_providers(
        config: AppConfig,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
        completion_provider: Option<Arc<dyn CompletionProvider>>,
    ) -> Self {
        let (embedding_retry, completion_retry) = retry_policies(&config);
        let collection = config.providers.vector_store.collection.clone();

        let indexing_service: Arc<dyn IndexingServiceInterface> =
            Arc::new(IndexingServiceImpl::new(
                Arc::clone(&embedding_provider),
                Arc::clone(&vector_store_provider),
                embedding_retry,
            ));
        let retrieval_service: Arc<dyn RetrievalServiceInterface> =
            Arc::new(RetrievalServiceImpl::new(
                Arc::clone(&embedding_provider),
                Arc::clone(&vector_store_provider),
                collection,
                embedding_retry,
            ));
        let answer_service = completion_provider.as_ref().map(|completion| {
            Arc::new(AnswerServiceImpl::new(
                Arc::clone(&retrieval_service),
                Arc::clone(completion),
                PromptAssembler::new(config.prompt.budget_chars),
                answer_settings(&config),
                completion_retry,
            )) as Arc<dyn AnswerServiceInterface>
        });

        Self {
            config: Arc::new(config),
            embedding_provider,
            vector_store_provider,
            completion_provider,
            indexing_service,
            retrieval_service,
            answer_service,
        }
    }

    /// Embedding provider
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedding_provider)
    }

    /// Vector store provider
    pub fn vector_store_provider(&self) -> Arc<dyn VectorStoreProvider> {
        Arc::clone(&self.vector_store_provider)
    }

    /// Completion provider, when configured
    pub fn completion_provider(&self) -> Option<Arc<dyn CompletionProvider>> {
        self.completion_provider.clone()
    }

    /// Indexing use case
    pub fn indexing_service(&self) -> Arc<dyn IndexingServiceInterface> {
        Arc::clone(&self.indexing_service)
    }

    /// Retrieval use case
    pub fn retrieval_service(&self) -> Arc<dyn RetrievalServiceInterface> {
        Arc::clone(&self.retrieval_service)
    }

    /// Answer use case
    ///
    /// Fails with a configuration error when no completion provider could be
    /// built (usually a missing API key).
    pub fn answer_service(&self) -> Result<Arc<dyn AnswerServiceInterface>> {
        self.answer_service.clone().ok_or_else(|| {
            Error::configuration(
                "No completion provider configured (set providers.api_key or OPENAI_API_KEY)",
            )
        })
    }

    /// Collection holding the corpus
    pub fn collection(&self) -> &str {
        &self.config.providers.vector_store.collection
    }
}

/// Build the application context from configuration
///
/// Embedding and vector store failures are fatal. A completion provider that
/// cannot be built (for example without an API key) only disables answering.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let client = http_client(&config.providers)?;
    let providers = &config.providers;

    let embedding = EmbeddingProviderFactory::create(
        &providers.embedding,
        providers.embedding_api_key(),
        &client,
    )?;
    let vector_store = VectorStoreProviderFactory::create(&providers.vector_store).await?;
    let completion = match CompletionProviderFactory::create(
        &providers.completion,
        providers.completion_api_key(),
        &client,
    ) {
        Ok(provider) => Some(provider),
        Err(e) => {
            info!(error = %e, "Answering disabled");
            None
        }
    };

    info!(
        embedding = embedding.provider_name(),
        vector_store = vector_store.provider_name(),
        completion = completion.as_ref().map_or("none", |c| c.provider_name()),
        collection = %providers.vector_store.collection,
        "Application context initialized"
    );

    Ok(AppContext::from_providers(
        config,
        embedding,
        vector_store,
        completion,
    ))
}
