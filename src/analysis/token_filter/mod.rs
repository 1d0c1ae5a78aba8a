//! Token filter implementations for token stream transformation.
//!
//! # Available Filters
//!
//! - [`length::LengthFilter`] - Drops tokens below a minimum length
//! - [`stop::StopFilter`] - Drops Spanish stopwords

pub mod length;
pub mod stop;

pub use length::LengthFilter;
pub use stop::StopFilter;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters may drop tokens but never reassign their `position` field, so
/// first-occurrence order survives filtering.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}
