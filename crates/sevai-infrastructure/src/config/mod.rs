//! Configuration management
//!
//! Layered configuration with Figment: defaults, TOML file, environment.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
