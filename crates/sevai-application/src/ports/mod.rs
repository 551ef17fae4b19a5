//! Application Port Interfaces
//!
//! - **providers** - external provider contracts, defined in `sevai-domain`
//! - **services.rs** - application service interfaces (indexing, retrieval, answering)

/// External service provider ports
pub use sevai_domain::ports::providers;
/// Application service interfaces
pub mod services;

pub use providers::{CompletionProvider, EmbeddingProvider, VectorStoreProvider};
pub use services::{
    AnswerServiceInterface, IndexingResult, IndexingServiceInterface, RetrievalServiceInterface,
};
