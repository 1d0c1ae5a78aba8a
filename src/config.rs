//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the counting pipeline.
///
/// Replaces the interactive prompts of the original tool with an explicit,
/// serializable config object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountConfig {
    /// Whether digits (and digit-letter mixes) are tokenizable.
    pub include_digits: bool,

    /// Minimum token length in characters. Values below 1 behave as 1.
    pub min_length: usize,

    /// Whether to drop Spanish stopwords before counting.
    pub exclude_stopwords: bool,

    /// How many top entries the console report shows.
    pub top_n: usize,
}

impl Default for CountConfig {
    fn default() -> Self {
        CountConfig {
            include_digits: false,
            min_length: 1,
            exclude_stopwords: true,
            top_n: 20,
        }
    }
}

impl CountConfig {
    /// Effective minimum length, clamped to at least 1.
    pub fn effective_min_length(&self) -> usize {
        self.min_length.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CountConfig::default();
        assert!(!config.include_digits);
        assert_eq!(config.min_length, 1);
        assert!(config.exclude_stopwords);
        assert_eq!(config.top_n, 20);
    }

    #[test]
    fn test_min_length_clamp() {
        let config = CountConfig {
            min_length: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_min_length(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CountConfig {
            include_digits: true,
            min_length: 3,
            exclude_stopwords: false,
            top_n: 50,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: CountConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
