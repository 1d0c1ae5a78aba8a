//! Analyzer trait and the configurable pipeline analyzer.
//!
//! An analyzer is the complete text processing chain:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use recuento::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use recuento::analysis::char_filter::LowercaseCharFilter;
//! use recuento::analysis::token_filter::StopFilter;
//! use recuento::analysis::tokenizer::WordTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new().unwrap()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["el", "y"])));
//!
//! let tokens: Vec<_> = analyzer.analyze("El gato y el perro").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["gato", "perro"]);
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a token stream.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines char filters, a tokenizer, and a
/// chain of token filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the token filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        // Apply char filters to the raw text
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        // Tokenize
        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;

        // Apply token filters in sequence
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}
