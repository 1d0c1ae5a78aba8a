//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Alphabetic runs with word-boundary semantics
//!   (digit-exclusive mode)
//! - [`whitespace::WhitespaceTokenizer`] - Whitespace splitting
//!   (digit-inclusive mode, after punctuation substitution)

pub mod whitespace;
pub mod word;

pub use whitespace::WhitespaceTokenizer;
pub use word::WordTokenizer;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that split text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Empty input yields an empty stream, never an error.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
