//! Domain Services
//!
//! Pure services that encapsulate the text-level business rules.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`DocumentNormalizer`] | Structured records to chunks |
//! | [`LanguageDetector`] | English/Tamil classification by script |
//! | [`PromptAssembler`] | Instruction, context and query within a budget |

/// Language detection
pub mod language;
/// Record normalization
pub mod normalizer;
/// Prompt assembly
pub mod prompt;

pub use language::{LanguageDetector, ScriptCounts, detect};
pub use normalizer::{DocumentNormalizer, NormalizationReport, SkippedRecord};
pub use prompt::PromptAssembler;
