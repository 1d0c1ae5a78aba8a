//! Text analysis pipeline: char filters, tokenizers, and token filters.
//!
//! Analysis turns raw document text into the stream of word tokens that the
//! frequency table counts. Processing order is fixed:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! Char filters normalize the text string itself (lowercasing, punctuation
//! substitution). The tokenizer splits the normalized text into [`token::Token`]s.
//! Token filters then drop tokens that are too short or belong to the
//! stopword set. [`analyzer::PipelineAnalyzer`] wires the stages together.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
