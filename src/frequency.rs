//! Word frequency aggregation.
//!
//! [`FrequencyTable`] counts distinct tokens and answers descending-order
//! queries. Ordering is deterministic: entries with equal counts keep the
//! order in which the words first appeared in the token stream.
//!
//! # Examples
//!
//! ```
//! use recuento::analysis::token::{IntoTokenStream, Token};
//! use recuento::frequency::FrequencyTable;
//!
//! let tokens = vec![
//!     Token::new("gato", 0),
//!     Token::new("perro", 1),
//!     Token::new("gato", 2),
//! ];
//! let table = FrequencyTable::from_tokens(tokens.into_token_stream());
//!
//! assert_eq!(table.total_count(), 3);
//! assert_eq!(table.unique_words(), 2);
//! assert_eq!(table.top_n(1), vec![("gato".to_string(), 2)]);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;

/// A single bar-chart datum: one word and its occurrence count.
///
/// This is the data contract for chart renderers; drawing is owned by the
/// consumer, not by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDatum {
    /// The word.
    pub label: String,
    /// Its occurrence count.
    pub value: u64,
}

#[derive(Clone, Debug)]
struct Entry {
    count: u64,
    first_seen: usize,
}

/// A frequency table mapping each distinct word to its occurrence count.
///
/// Built once from a token stream and immutable afterwards. The sum of all
/// counts equals the number of tokens that survived filtering.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    entries: AHashMap<String, Entry>,
    total: u64,
}

impl FrequencyTable {
    /// Build a frequency table from a token stream.
    ///
    /// An empty stream yields an empty table, which is a valid terminal
    /// state, not an error.
    pub fn from_tokens(tokens: TokenStream) -> Self {
        let mut entries: AHashMap<String, Entry> = AHashMap::new();
        let mut total = 0u64;

        for token in tokens {
            let position = token.position;
            entries
                .entry(token.text)
                .and_modify(|e| e.count += 1)
                .or_insert(Entry {
                    count: 1,
                    first_seen: position,
                });
            total += 1;
        }

        FrequencyTable { entries, total }
    }

    /// Total number of counted tokens (sum of all counts).
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn unique_words(&self) -> usize {
        self.entries.len()
    }

    /// Occurrence count for a word, or 0 if absent.
    pub fn count(&self, word: &str) -> u64 {
        self.entries.get(word).map(|e| e.count).unwrap_or(0)
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` highest-count words as `(word, count)` pairs.
    ///
    /// Sorted by descending count; equal counts keep first-appearance order.
    /// `n == 0` returns an empty vector; `n` past the table size returns all
    /// entries, fully sorted.
    pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut sorted = self.sorted_entries();
        sorted.truncate(n);
        sorted
    }

    /// Every entry sorted by descending count with stable tie order.
    pub fn sorted_entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(&String, &Entry)> = self.entries.iter().collect();
        entries.sort_by_key(|(_, e)| (std::cmp::Reverse(e.count), e.first_seen));
        entries
            .into_iter()
            .map(|(word, e)| (word.clone(), e.count))
            .collect()
    }

    /// The top-`n` entries as chart data for a bar-chart renderer.
    pub fn chart_data(&self, n: usize) -> Vec<ChartDatum> {
        self.top_n(n)
            .into_iter()
            .map(|(label, value)| ChartDatum { label, value })
            .collect()
    }

    /// The full `word → count` map for a word-cloud renderer.
    pub fn to_map(&self) -> std::collections::HashMap<String, u64> {
        self.entries
            .iter()
            .map(|(word, e)| (word.clone(), e.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, Token};

    fn stream_of(words: &[&str]) -> TokenStream {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect::<Vec<_>>()
            .into_token_stream()
    }

    #[test]
    fn test_counts_and_totals() {
        let table = FrequencyTable::from_tokens(stream_of(&[
            "el", "gato", "y", "el", "perro", "el", "gato", "corre",
        ]));

        assert_eq!(table.count("el"), 3);
        assert_eq!(table.count("gato"), 2);
        assert_eq!(table.count("y"), 1);
        assert_eq!(table.count("perro"), 1);
        assert_eq!(table.count("corre"), 1);
        assert_eq!(table.count("ausente"), 0);
        assert_eq!(table.total_count(), 8);
        assert_eq!(table.unique_words(), 5);
    }

    #[test]
    fn test_top_n_with_stable_ties() {
        let table = FrequencyTable::from_tokens(stream_of(&[
            "el", "gato", "y", "el", "perro", "el", "gato", "corre",
        ]));

        assert_eq!(
            table.top_n(2),
            vec![("el".to_string(), 3), ("gato".to_string(), 2)]
        );

        // The three singletons tie; first-appearance order breaks the tie.
        let all = table.top_n(100);
        assert_eq!(
            all,
            vec![
                ("el".to_string(), 3),
                ("gato".to_string(), 2),
                ("y".to_string(), 1),
                ("perro".to_string(), 1),
                ("corre".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_n_zero() {
        let table = FrequencyTable::from_tokens(stream_of(&["gato"]));
        assert!(table.top_n(0).is_empty());
    }

    #[test]
    fn test_empty_stream() {
        let table = FrequencyTable::from_tokens(stream_of(&[]));
        assert!(table.is_empty());
        assert_eq!(table.total_count(), 0);
        assert_eq!(table.unique_words(), 0);
        assert!(table.top_n(10).is_empty());
    }

    #[test]
    fn test_chart_data() {
        let table = FrequencyTable::from_tokens(stream_of(&["gato", "gato", "perro"]));
        let data = table.chart_data(2);

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].label, "gato");
        assert_eq!(data[0].value, 2);
        assert_eq!(data[1].label, "perro");
        assert_eq!(data[1].value, 1);
    }

    #[test]
    fn test_to_map() {
        let table = FrequencyTable::from_tokens(stream_of(&["gato", "gato", "perro"]));
        let map = table.to_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map["gato"], 2);
        assert_eq!(map["perro"], 1);
    }
}
