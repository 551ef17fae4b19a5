//! Dependency wiring
//!
//! Plain constructor injection: factories turn configuration into
//! `Arc<dyn Port>` providers and the bootstrap hands them to the use cases.

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{AppContext, answer_settings, init_app};
pub use factory::{
    CompletionProviderFactory, EmbeddingProviderFactory, VectorStoreProviderFactory,
};
