//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing word
//! tokens, the units that flow through the analysis pipeline into the
//! frequency table.
//!
//! # Examples
//!
//! Creating a simple token:
//!
//! ```
//! use recuento::analysis::token::Token;
//!
//! let token = Token::new("hola", 0);
//! assert_eq!(token.text, "hola");
//! assert_eq!(token.position, 0);
//! ```
//!
//! Creating a token with offsets:
//!
//! ```
//! use recuento::analysis::token::Token;
//!
//! let token = Token::with_offsets("mundo", 1, 5, 10);
//! assert_eq!(token.start_offset, 5);
//! assert_eq!(token.end_offset, 10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single word unit after tokenization.
///
/// The `position` field records where the token appeared in the stream
/// (0-based). The frequency table uses the position of a word's first
/// occurrence to break ties between equal counts, so tokenizers must emit
/// positions in appearance order and filters must never reassign them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the analyzed text
    pub start_offset: usize,

    /// The byte offset where this token ends in the analyzed text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Get the length of the token text in characters.
    ///
    /// Accented Spanish letters are multi-byte in UTF-8, so length-based
    /// filtering must count characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
