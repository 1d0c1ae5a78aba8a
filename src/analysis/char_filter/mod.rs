//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text string before it reaches the tokenizer.
//! Token offsets produced downstream refer to the filtered text, not the
//! original document text.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement

pub mod lowercase;
pub mod pattern_replace;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}
