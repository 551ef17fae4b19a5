//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `sevai_infrastructure::constants`.

// ============================================================================
// INDEXING DOMAIN CONSTANTS
// ============================================================================

/// Default batch size for embedding requests during indexing
pub const INDEXING_BATCH_SIZE: usize = 16;

/// Default collection holding the scheme/service corpus
pub const DEFAULT_COLLECTION: &str = "schemes";

// ============================================================================
// RETRIEVAL DOMAIN CONSTANTS
// ============================================================================

/// Default number of chunks returned by the retriever
pub const RETRIEVAL_DEFAULT_TOP_K: usize = 3;

/// Default minimum cosine similarity for a chunk to count as relevant
pub const RETRIEVAL_DEFAULT_THRESHOLD: f32 = 0.2;

// ============================================================================
// QUERY / PROMPT DOMAIN CONSTANTS
// ============================================================================

/// Maximum accepted raw query length in characters
pub const QUERY_MAX_CHARS: usize = 2_000;

/// Default prompt budget in characters (instruction + context + query)
pub const PROMPT_DEFAULT_BUDGET_CHARS: usize = 12_000;

/// Default completion token cap
pub const GENERATION_DEFAULT_MAX_TOKENS: u32 = 1_000;

/// Default sampling temperature
pub const GENERATION_DEFAULT_TEMPERATURE: f32 = 0.7;

// ============================================================================
// LANGUAGE CONSTANTS
// ============================================================================

/// First code point of the Tamil Unicode block
pub const TAMIL_BLOCK_START: char = '\u{0B80}';

/// Last code point of the Tamil Unicode block
pub const TAMIL_BLOCK_END: char = '\u{0BFF}';
