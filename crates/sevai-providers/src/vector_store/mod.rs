//! Vector store provider implementations
//!
//! | Provider | Persistence | Feature |
//! |----------|-------------|---------|
//! | [`InMemoryVectorStoreProvider`] | none | always |
//! | [`FilesystemVectorStoreProvider`] | JSON snapshot per collection | `vectorstore-filesystem` |

#[cfg(feature = "vectorstore-filesystem")]
pub mod filesystem;
pub mod in_memory;

#[cfg(feature = "vectorstore-filesystem")]
pub use filesystem::FilesystemVectorStoreProvider;
pub use in_memory::{CollectionData, InMemoryVectorStoreProvider};
