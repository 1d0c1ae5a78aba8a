//! Regex-based replacement char filter implementation.

use regex::Regex;

use super::CharFilter;
use crate::error::{RecuentoError, Result};

/// A char filter that replaces characters matching a regex pattern.
///
/// The digit-inclusive tokenizer mode uses this to turn punctuation into
/// spaces before whitespace tokenization, so that digits and digit-letter
/// mixes survive while punctuation does not.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

/// Pattern matching every character that is not a word character, not
/// whitespace, and not an accented Spanish letter.
pub const NON_WORD_PATTERN: &str = r"[^\w\sáéíóúüñ]";

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| RecuentoError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(PatternReplaceCharFilter {
            pattern: regex,
            replacement: replacement.to_string(),
        })
    }

    /// Create the filter that replaces punctuation with a single space.
    pub fn punctuation_to_space() -> Result<Self> {
        Self::new(NON_WORD_PATTERN, " ")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, self.replacement.as_str()).into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
