//! OpenAI-compatible Completion Provider
//!
//! Implements the CompletionProvider port against `POST {base}/chat/completions`.
//! The default base URL is OpenRouter; OpenRouter attribution headers are
//! sent on every request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::CompletionProvider;
use sevai_domain::value_objects::{GenerationParams, Prompt};

use crate::constants::{
    COMPLETION_DEFAULT_MODEL, CONTENT_TYPE_JSON, FINISH_REASON_CONTENT_FILTER,
    OPENROUTER_BASE_URL, OPENROUTER_DEFAULT_REFERER, OPENROUTER_DEFAULT_TITLE,
};
use crate::embedding::helpers::constructor;
use crate::utils::{ApiService, HttpResponseUtils};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Attribution headers sent to OpenRouter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// `HTTP-Referer` header
    pub referer: String,
    /// `X-Title` header
    pub title: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            referer: OPENROUTER_DEFAULT_REFERER.to_string(),
            title: OPENROUTER_DEFAULT_TITLE.to_string(),
        }
    }
}

/// OpenAI-compatible chat completion provider
///
/// ## Example
///
/// ```rust,no_run
/// use sevai_providers::completion::{Attribution, OpenAICompletionProvider};
/// use std::time::Duration;
///
/// let provider = OpenAICompletionProvider::new(
///     "sk-or-your-key".to_string(),
///     None,
///     None,
///     Attribution::default(),
///     Duration::from_secs(60),
///     reqwest::Client::new(),
/// );
/// ```
pub struct OpenAICompletionProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    attribution: Attribution,
    timeout: Duration,
    http_client: Client,
}

impl OpenAICompletionProvider {
    /// Create a new completion provider
    ///
    /// # Arguments
    /// * `api_key` - API key sent as a bearer token
    /// * `base_url` - Optional custom base URL (defaults to OpenRouter)
    /// * `model` - Optional model (defaults to `google/gemma-3-27b-it:free`)
    /// * `attribution` - OpenRouter attribution headers
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        attribution: Attribution,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::validate_url(base_url),
            model: model
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| COMPLETION_DEFAULT_MODEL.to_string()),
            attribution,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENROUTER_BASE_URL)
    }

    fn request_body<'a>(
        &'a self,
        system: &'a str,
        prompt: &'a Prompt,
        params: &GenerationParams,
    ) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.query,
                },
            ],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }
}

/// Extract the generated text from a chat response
fn extract_text(response: ChatResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::completion_unavailable("response contained no choices"))?;

    if choice.finish_reason.as_deref() == Some(FINISH_REASON_CONTENT_FILTER) {
        return Err(Error::completion_rejected(
            "the backend filtered the response for content policy",
        ));
    }

    Ok(choice.message.and_then(|m| m.content).unwrap_or_default())
}

#[async_trait]
impl CompletionProvider for OpenAICompletionProvider {
    async fn complete(&self, prompt: &Prompt, params: &GenerationParams) -> Result<String> {
        let system = prompt.system_message();
        let body = self.request_body(&system, prompt, params);

        debug!(
            model = %self.model,
            prompt_chars = prompt.len_chars(),
            max_tokens = params.max_tokens,
            "Requesting completion"
        );

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("HTTP-Referer", &self.attribution.referer)
            .header("X-Title", &self.attribution.title)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::transport_error(
                    e,
                    "Completion",
                    ApiService::Completion,
                    self.timeout,
                )
            })?;

        let parsed: ChatResponse =
            HttpResponseUtils::check_and_parse(response, "Completion", ApiService::Completion)
                .await?;
        extract_text(parsed)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
