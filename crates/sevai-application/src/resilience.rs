//! Timeout and single-retry wrapper for external service calls
//!
//! Embedding and completion calls share one contract: each attempt is bounded
//! by a timeout, and a transient failure gets exactly one more attempt after
//! a fixed backoff. Everything else is returned as-is.

use sevai_domain::error::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// External service a call is made to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Embedding backend
    Embedding,
    /// Completion backend
    Completion,
}

impl ServiceKind {
    fn unavailable(self, message: String) -> Error {
        match self {
            Self::Embedding => Error::embedding_unavailable(message),
            Self::Completion => Error::completion_unavailable(message),
        }
    }
}

/// Timeout and backoff for one external service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Upper bound for a single attempt
    pub timeout: Duration,
    /// Pause before the retry
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Create a policy
    pub fn new(timeout: Duration, backoff: Duration) -> Self {
        Self { timeout, backoff }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            backoff: Duration::from_millis(500),
        }
    }
}

async fn attempt<T, F, Fut>(
    policy: &RetryPolicy,
    service: ServiceKind,
    operation: &str,
    call: &mut F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match tokio::time::timeout(policy.timeout, call()).await {
        Ok(result) => result,
        Err(_) => Err(service.unavailable(format!(
            "{operation} timed out after {}ms",
            policy.timeout.as_millis()
        ))),
    }
}

/// Run `call` with a timeout, retrying once on a transient error
///
/// # Example
///
/// ```ignore
/// let embedding = call_with_retry(&policy, ServiceKind::Embedding, "embed query", || {
///     provider.embed(&query.text)
/// })
/// .await?;
/// ```
pub async fn call_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    service: ServiceKind,
    operation: &str,
    mut call: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match attempt(policy, service, operation, &mut call).await {
        Err(e) if e.is_transient() => {
            warn!(
                operation,
                error = %e,
                backoff_ms = policy.backoff.as_millis() as u64,
                "Transient failure, retrying once"
            );
            tokio::time::sleep(policy.backoff).await;
            attempt(policy, service, operation, &mut call).await
        }
        other => other,
    }
}
