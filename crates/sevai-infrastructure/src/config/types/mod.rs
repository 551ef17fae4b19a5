//! Configuration types module

pub mod app;
pub mod ingestion;
pub mod logging;
pub mod pipeline;
pub mod providers;

// Re-export main types
pub use app::*;
