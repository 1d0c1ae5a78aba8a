//! Lowercase char filter implementation.

use super::CharFilter;

/// A char filter that lowercases the entire text.
///
/// Runs before tokenization so that both tokenizer modes see normalized
/// input. `str::to_lowercase` handles the accented vowels and "ñ" correctly
/// ("Ñ" → "ñ", "Á" → "á"), which a byte-wise ASCII lowercase would not.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_ascii() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("Hola Mundo"), "hola mundo");
    }

    #[test]
    fn test_lowercase_accented() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("NIÑO ÁRBOL"), "niño árbol");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseCharFilter::new().name(), "lowercase");
    }
}
