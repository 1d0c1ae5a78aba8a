//! Length filter implementation.

use super::TokenFilter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that removes tokens shorter than a minimum length.
///
/// Length is measured in characters, not bytes, so "ñu" counts as two.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_length: usize,
}

impl LengthFilter {
    /// Create a new length filter with the given minimum.
    ///
    /// Minimums below 1 are clamped to 1.
    pub fn new(min_length: usize) -> Self {
        LengthFilter {
            min_length: min_length.max(1),
        }
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl TokenFilter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered: Vec<Token> = tokens.filter(|t| t.char_len() >= min_length).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
