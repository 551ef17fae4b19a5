//! Language Value Object
//!
//! The two natural languages the assistant understands and answers in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported corpus/query language
///
/// Serialized as the short tag stored in chunk metadata (`en` / `ta`);
/// the long names are accepted on input.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en", alias = "english", alias = "English")]
    English,
    /// Tamil
    #[serde(rename = "ta", alias = "tamil", alias = "Tamil")]
    Tamil,
}

impl Language {
    /// Short metadata tag
    pub fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Tamil => "ta",
        }
    }

    /// Human-readable name, as used in prompt directives
    pub fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Tamil => "Tamil",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Self::English),
            "ta" | "tam" | "tamil" | "தமிழ்" => Ok(Self::Tamil),
            other => Err(Error::invalid_argument(format!(
                "Unsupported language tag: {other}"
            ))),
        }
    }
}
