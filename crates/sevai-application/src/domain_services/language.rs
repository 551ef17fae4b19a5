//! Language Detection Domain Service
//!
//! Classifies text as English or Tamil by script. Tamil wins only when
//! Tamil-block characters strictly outnumber Latin letters, so a Tamil word
//! inside an English sentence does not flip the answer language.
//!
//! Mixed-script input is therefore not always English: a Tamil question that
//! names a scheme in Latin letters ("PM Kisan திட்டம் என்ன?") is Tamil, so the
//! user gets a Tamil reply. Ties and input without Tamil characters are
//! English.

use sevai_domain::constants::{TAMIL_BLOCK_END, TAMIL_BLOCK_START};
use sevai_domain::value_objects::Language;

/// Script counts of a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    /// Characters in the Tamil Unicode block
    pub tamil: usize,
    /// ASCII letters
    pub latin: usize,
}

impl ScriptCounts {
    /// Count Tamil and Latin characters in a text
    pub fn of(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut counts, c| {
            if (TAMIL_BLOCK_START..=TAMIL_BLOCK_END).contains(&c) {
                counts.tamil += 1;
            } else if c.is_ascii_alphabetic() {
                counts.latin += 1;
            }
            counts
        })
    }
}

/// Stateless language detector
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    /// Create a detector
    pub fn new() -> Self {
        Self
    }

    /// Detect the language of a text
    pub fn detect(&self, text: &str) -> Language {
        detect(text)
    }
}

/// Detect the language of a text
///
/// Empty input, ties and Latin-majority mixed input are English.
pub fn detect(text: &str) -> Language {
    let counts = ScriptCounts::of(text);
    if counts.tamil > 0 && counts.tamil > counts.latin {
        Language::Tamil
    } else {
        Language::English
    }
}
