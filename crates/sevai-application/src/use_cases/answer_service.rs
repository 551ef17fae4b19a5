//! Answer Service Use Case
//!
//! Orchestrates one turn: validate the raw question, detect its language,
//! retrieve context, assemble the prompt and call the completion backend.

use crate::domain_services::{PromptAssembler, detect};
use crate::ports::services::{AnswerServiceInterface, RetrievalServiceInterface};
use crate::resilience::{RetryPolicy, ServiceKind, call_with_retry};
use sevai_domain::constants::{
    QUERY_MAX_CHARS, RETRIEVAL_DEFAULT_THRESHOLD, RETRIEVAL_DEFAULT_TOP_K,
};
use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::CompletionProvider;
use sevai_domain::value_objects::{Answer, GenerationParams, Language, Prompt, Query};
use std::sync::Arc;
use tracing::{error, info};

/// Per-turn limits and parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerSettings {
    /// Chunks retrieved per question
    pub top_k: usize,
    /// Minimum cosine similarity of a retrieved chunk
    pub relevance_threshold: f32,
    /// Longest accepted question, in characters
    pub max_query_chars: usize,
    /// Completion parameters
    pub generation: GenerationParams,
}

impl Default for AnswerSettings {
    fn default() -> Self {
        Self {
            top_k: RETRIEVAL_DEFAULT_TOP_K,
            relevance_threshold: RETRIEVAL_DEFAULT_THRESHOLD,
            max_query_chars: QUERY_MAX_CHARS,
            generation: GenerationParams::default(),
        }
    }
}

/// Apology shown instead of an error, in the user's language
pub fn apology(language: Language, error: &Error) -> &'static str {
    match (language, error) {
        (Language::English, Error::QueryTooLong { .. }) => {
            "Sorry, your question is too long. Please ask a shorter question."
        }
        (Language::Tamil, Error::QueryTooLong { .. }) => {
            "மன்னிக்கவும், உங்கள் கேள்வி மிக நீளமாக உள்ளது. சுருக்கமாகக் கேட்கவும்."
        }
        (Language::English, Error::InvalidArgument { .. }) => "Please type a question.",
        (Language::Tamil, Error::InvalidArgument { .. }) => {
            "தயவுசெய்து ஒரு கேள்வியை உள்ளிடவும்."
        }
        (Language::English, _) => {
            "Sorry, I could not answer your question right now. Please try again."
        }
        (Language::Tamil, _) => {
            "மன்னிக்கவும், உங்கள் கேள்விக்கு இப்போது பதிலளிக்க முடியவில்லை. தயவுசெய்து மீண்டும் முயற்சிக்கவும்."
        }
    }
}

/// Answer service implementation
pub struct AnswerServiceImpl {
    retrieval_service: Arc<dyn RetrievalServiceInterface>,
    completion_provider: Arc<dyn CompletionProvider>,
    assembler: PromptAssembler,
    settings: AnswerSettings,
    retry: RetryPolicy,
}

impl AnswerServiceImpl {
    /// Create new answer service with injected dependencies
    pub fn new(
        retrieval_service: Arc<dyn RetrievalServiceInterface>,
        completion_provider: Arc<dyn CompletionProvider>,
        assembler: PromptAssembler,
        settings: AnswerSettings,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            retrieval_service,
            completion_provider,
            assembler,
            settings,
            retry,
        }
    }

    /// Trim, bound and classify the raw question
    ///
    /// Runs before retrieval, so an oversized question never reaches the
    /// embedding service.
    fn validate(&self, raw: &str) -> Result<Query> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(Error::invalid_argument("query is empty"));
        }
        let length = text.chars().count();
        if length > self.settings.max_query_chars {
            return Err(Error::QueryTooLong {
                length,
                max: self.settings.max_query_chars,
            });
        }
        let query = Query::new(text, detect(text));
        self.assembler.check_fits(&query)?;
        Ok(query)
    }
}

#[async_trait::async_trait]
impl AnswerServiceInterface for AnswerServiceImpl {
    async fn prepare(&self, raw: &str) -> Result<Prompt> {
        let query = self.validate(raw)?;
        let retrieval = self
            .retrieval_service
            .retrieve(
                &query,
                self.settings.top_k,
                self.settings.relevance_threshold,
            )
            .await?;
        info!(
            language = query.language.tag(),
            hits = retrieval.len(),
            language_fallback = retrieval.language_fallback,
            "Retrieved context"
        );
        self.assembler.assemble(&query, &retrieval)
    }

    async fn answer(&self, raw: &str) -> Result<Answer> {
        let prompt = self.prepare(raw).await?;
        let provider = &self.completion_provider;
        let params = &self.settings.generation;
        let prompt_ref = &prompt;
        let generated = call_with_retry(&self.retry, ServiceKind::Completion, "complete", || {
            provider.complete(prompt_ref, params)
        })
        .await?;

        let text = generated.trim();
        if text.is_empty() {
            return Err(Error::completion_unavailable(
                "completion backend returned an empty response",
            ));
        }

        Ok(Answer {
            text: text.to_string(),
            language: prompt.language,
            used_context: !prompt.included_chunk_ids.is_empty(),
            sources: prompt.included_chunk_ids,
        })
    }

    async fn respond(&self, raw: &str) -> String {
        match self.answer(raw).await {
            Ok(answer) => answer.text,
            Err(e) => {
                let language = detect(raw);
                error!(error = %e, language = language.tag(), "Failed to answer question");
                apology(language, &e).to_string()
            }
        }
    }
}
