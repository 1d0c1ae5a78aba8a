//! The end-to-end counting pipeline.
//!
//! Ties extraction, analysis, and aggregation together:
//!
//! ```text
//! docx path → extract_text → analyzer (per config) → FrequencyTable
//! ```
//!
//! # Examples
//!
//! ```
//! use recuento::config::CountConfig;
//! use recuento::pipeline::count_text;
//!
//! let config = CountConfig {
//!     exclude_stopwords: false,
//!     ..Default::default()
//! };
//! let table = count_text("El gato y el perro. El gato corre.", &config).unwrap();
//!
//! assert_eq!(table.count("el"), 3);
//! assert_eq!(table.count("gato"), 2);
//! assert_eq!(table.total_count(), 8);
//! ```

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{LowercaseCharFilter, PatternReplaceCharFilter};
use crate::analysis::token_filter::{LengthFilter, StopFilter};
use crate::analysis::tokenizer::{WhitespaceTokenizer, WordTokenizer};
use crate::config::CountConfig;
use crate::error::Result;
use crate::extract::extract_text;
use crate::frequency::FrequencyTable;

/// Build the analyzer a configuration describes.
///
/// One configurable pipeline covers both tokenizer modes:
///
/// - digit-exclusive (default): lowercase, then word-boundary tokenization
///   over the Spanish letter class.
/// - digit-inclusive: lowercase, replace punctuation with spaces, then
///   whitespace tokenization.
///
/// A length filter and the Spanish stop filter are appended as the
/// configuration requires.
pub fn build_analyzer(config: &CountConfig) -> Result<PipelineAnalyzer> {
    let mut analyzer = if config.include_digits {
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::punctuation_to_space()?))
    } else {
        PipelineAnalyzer::new(Arc::new(WordTokenizer::new()?))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
    };

    if config.effective_min_length() > 1 {
        analyzer = analyzer.add_filter(Arc::new(LengthFilter::new(config.effective_min_length())));
    }

    if config.exclude_stopwords {
        analyzer = analyzer.add_filter(Arc::new(StopFilter::new()));
    }

    Ok(analyzer)
}

/// Count word frequencies in a text under the given configuration.
///
/// Empty text yields an empty table, a valid non-error result.
pub fn count_text(text: &str, config: &CountConfig) -> Result<FrequencyTable> {
    let analyzer = build_analyzer(config)?;
    let tokens = analyzer.analyze(text)?;
    let table = FrequencyTable::from_tokens(tokens);

    debug!(
        "counted {} tokens, {} unique",
        table.total_count(),
        table.unique_words()
    );

    Ok(table)
}

/// Count word frequencies in a `.docx` document.
///
/// Extraction failures abort the pipeline; a document with no text produces
/// an empty table.
pub fn count_document(path: &Path, config: &CountConfig) -> Result<FrequencyTable> {
    let text = extract_text(path)?;

    if text.is_empty() {
        info!("'{}' contains no extractable text", path.display());
    }

    count_text(&text, config)
}
