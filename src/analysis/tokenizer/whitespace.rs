//! Whitespace tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Every non-empty piece between whitespace runs becomes a token. This is
/// the tokenizer for digit-inclusive mode, where a pattern-replace char
/// filter has already turned punctuation into spaces and anything left
/// standing (letters, digits, digit-letter mixes, underscores) counts as a
/// word.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut offset = 0;

        for part in text.split_whitespace() {
            // split_whitespace discards the gaps, so recover the byte offset
            // by searching forward from the end of the previous token.
            let start = offset + text[offset..].find(part).unwrap_or(0);
            let end = start + part.len();
            tokens.push(Token::with_offsets(part, position, start, end));
            position += 1;
            offset = end;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
