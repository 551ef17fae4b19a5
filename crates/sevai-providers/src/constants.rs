//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in sevai-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Hashing embedding provider dimension
pub const EMBEDDING_DIMENSION_HASHING: usize = 384;

/// Model name reported by the hashing provider
pub const EMBEDDING_MODEL_HASHING: &str = "hashing-384";

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Default OpenAI embedding model
pub const EMBEDDING_DEFAULT_OPENAI_MODEL: &str = "text-embedding-3-small";

// ============================================================================
// COMPLETION PROVIDER CONSTANTS
// ============================================================================

/// Default chat model (served by OpenRouter)
pub const COMPLETION_DEFAULT_MODEL: &str = "google/gemma-3-27b-it:free";

/// OpenRouter attribution: referring site
pub const OPENROUTER_DEFAULT_REFERER: &str = "https://github.com/chatbot";

/// OpenRouter attribution: application title
pub const OPENROUTER_DEFAULT_TITLE: &str = "Bilingual Government Services Chatbot";

/// Finish reason reported when the backend filtered the output
pub const FINISH_REASON_CONTENT_FILTER: &str = "content_filter";

// ============================================================================
// API ENDPOINT CONSTANTS
// ============================================================================

/// OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenRouter API base URL (OpenAI compatible)
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

// ============================================================================
// VECTOR STORE PROVIDER CONSTANTS
// ============================================================================

/// Extension of collection snapshot files
pub const SNAPSHOT_FILE_EXTENSION: &str = "json";

/// Extension of in-progress snapshot files
pub const SNAPSHOT_TEMP_EXTENSION: &str = "json.tmp";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds (for embedding and completion API calls)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client maximum idle connections per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client idle connection timeout in seconds
pub const HTTP_CLIENT_IDLE_TIMEOUT_SECS: u64 = 90;

/// HTTP TCP keep-alive interval in seconds
pub const HTTP_KEEPALIVE_SECS: u64 = 60;

/// Longest error body echoed into an error message
pub const HTTP_ERROR_BODY_MAX_CHARS: usize = 500;
