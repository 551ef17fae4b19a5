//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `sevai_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sevai.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sevai";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SEVAI";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional environment variable holding the API key
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "SEVAI_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Number of rotated log files kept
pub const LOG_MAX_FILES: usize = 7;

/// File name prefix when the configured log path has no stem
pub const LOG_DEFAULT_FILE_PREFIX: &str = "sevai";

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Default embedding provider (offline)
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashing";

/// Default completion provider
pub const DEFAULT_COMPLETION_PROVIDER: &str = "openrouter";

/// Default vector store provider
pub const DEFAULT_VECTOR_STORE_PROVIDER: &str = "filesystem";

/// Default directory of the file-backed index
pub const DEFAULT_INDEX_DIR: &str = ".sevai/index";

/// Default embedding request timeout in milliseconds
pub const EMBEDDING_TIMEOUT_MS: u64 = 30_000;

/// Default completion request timeout in milliseconds
pub const COMPLETION_TIMEOUT_MS: u64 = 60_000;

/// Pause before the single retry of a transient failure
pub const RETRY_BACKOFF_MS: u64 = 500;

// ============================================================================
// INGESTION CONSTANTS
// ============================================================================

/// Directory holding the default corpus files
pub const DEFAULT_DATA_DIR: &str = "data";
