//! Stop filter implementation.
//!
//! This module provides a filter that removes common Spanish function words
//! (stopwords) that typically dominate frequency counts without carrying
//! meaning. Includes a default Spanish stopword list, with support for
//! custom word lists.
//!
//! # Examples
//!
//! ```
//! use recuento::analysis::token_filter::TokenFilter;
//! use recuento::analysis::token_filter::stop::StopFilter;
//! use recuento::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses the default Spanish stopwords
//! let tokens = vec![
//!     Token::new("el", 0),
//!     Token::new("gato", 1),
//!     Token::new("corre", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "el" is removed as a stopword
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "gato");
//! assert_eq!(result[1].text, "corre");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use super::TokenFilter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Default Spanish stopword list.
///
/// Articles, prepositions, conjunctions, pronouns, and the most common
/// auxiliary verb forms. All entries are lower-case; the filter runs after
/// lowercasing, so membership tests need no case folding.
const DEFAULT_SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos", "en",
    "entre", "era", "eran", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estas", "este",
    "esto", "estos", "fue", "fueron", "ha", "haber", "había", "habían", "han", "has", "hasta",
    "hay", "la", "las", "le", "les", "lo", "los", "me", "mi", "mis", "mucho", "muchos", "muy",
    "más", "ni", "no", "nos", "nosotros", "nuestra", "nuestras", "nuestro", "nuestros", "o", "os",
    "otra", "otras", "otro", "otros", "para", "pero", "poco", "por", "porque", "que", "quien",
    "quienes", "qué", "se", "sea", "según", "ser", "si", "sin", "sobre", "somos", "son", "soy",
    "su", "sus", "sí", "también", "tanto", "te", "tenemos", "tener", "tengo", "ti", "tiene",
    "tienen", "todo", "todos", "tu", "tus", "tú", "un", "una", "unas", "uno", "unos", "y", "ya",
    "yo",
];

/// Default Spanish stopwords as a HashSet.
pub static DEFAULT_SPANISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_SPANISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stopwords from the token stream.
///
/// The stopword set is immutable and shared via `Arc`, so cloning the filter
/// or sharing it across threads never copies the word list.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Spanish stopwords.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::new(DEFAULT_SPANISH_STOP_WORDS_SET.clone()),
        }
    }

    /// Create a stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: HashSet<String> = words.into_iter().map(|s| s.into()).collect();
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a stop filter sharing an existing stopword set.
    pub fn from_set(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter { stop_words }
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stopwords in the set.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let filtered: Vec<Token> = tokens.filter(|t| !stop_words.contains(&t.text)).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stop_filter() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("el", 0),
            Token::new("gato", 1),
            Token::new("y", 2),
            Token::new("perro", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "gato");
        assert_eq!(result[1].text, "perro");
    }

    #[test]
    fn test_default_list_membership() {
        let filter = StopFilter::new();
        assert!(filter.is_stop_word("el"));
        assert!(filter.is_stop_word("y"));
        assert!(filter.is_stop_word("según"));
        assert!(!filter.is_stop_word("gato"));
    }

    #[test]
    fn test_custom_words() {
        let filter = StopFilter::from_words(vec!["foo", "bar"]);
        assert!(filter.is_stop_word("foo"));
        assert!(!filter.is_stop_word("el"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_positions_preserved() {
        let filter = StopFilter::new();
        let tokens = vec![Token::new("el", 0), Token::new("gato", 1)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].position, 1);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
