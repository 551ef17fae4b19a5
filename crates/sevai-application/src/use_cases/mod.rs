//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`IndexingServiceImpl`] | Corpus ingestion into the chunk index |
//! | [`RetrievalServiceImpl`] | Thresholded semantic search with language fallback |
//! | [`AnswerServiceImpl`] | One question in, one grounded answer out |

/// Answer orchestration
pub mod answer_service;
/// Corpus indexing
pub mod indexing_service;
/// Semantic retrieval
pub mod retrieval_service;

pub use answer_service::{AnswerServiceImpl, AnswerSettings, apology};
pub use indexing_service::IndexingServiceImpl;
pub use retrieval_service::RetrievalServiceImpl;
