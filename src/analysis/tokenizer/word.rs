//! Word-boundary regex tokenizer implementation.

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{RecuentoError, Result};

/// Default pattern: maximal runs of Spanish letters with word boundaries on
/// both sides.
///
/// The boundary anchors make a letter run glued to a digit or underscore
/// unmatchable as a whole ("gatos3" yields nothing), which is the documented
/// digit-exclusive rule. Input is lowercased before tokenization, so the
/// class covers only the lower range.
pub const SPANISH_WORD_PATTERN: &str = r"\b[a-záéíóúüñ]+\b";

/// A regex-based tokenizer that extracts alphabetic word runs.
///
/// This is the tokenizer for digit-exclusive mode: digits and underscores
/// are never part of a token.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default Spanish letter pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(SPANISH_WORD_PATTERN)
    }

    /// Create a new word tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| RecuentoError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer { pattern: regex })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("el gato corre.").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "el");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].text, "gato");
        assert_eq!(tokens[2].text, "corre");
        assert_eq!(tokens[2].start_offset, 8);
        assert_eq!(tokens[2].end_offset, 13);
    }

    #[test]
    fn test_accented_words() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("el niño comió").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["el", "niño", "comió"]);
    }

    #[test]
    fn test_digits_excluded() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hay 3 gatos y 2 perros").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["hay", "gatos", "y", "perros"]);
    }

    #[test]
    fn test_digit_adjacent_run_excluded() {
        // No word boundary between a letter and a digit, so the whole run
        // fails to match.
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("gatos3 perro").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "perro");
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().unwrap().name(), "word");
    }
}
