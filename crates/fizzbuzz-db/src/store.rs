//! The storage seam between the service and the backing store.

use async_trait::async_trait;
use fizzbuzz_types::{ParameterStats, RequestRecord, WordStats};

use crate::error::DbError;

/// Append-only log of processed requests with aggregate reads.
///
/// Implementations must be safe to share across request handlers; the
/// service holds them as `Arc<dyn StatsStore>`. Reads need not observe the
/// most recent write.
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Short name of the backend, used in logs.
    fn backend(&self) -> &'static str;

    /// Append one request record to the log.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    async fn record(&self, record: &RequestRecord) -> Result<(), DbError>;

    /// Total number of recorded requests.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    async fn total_requests(&self) -> Result<u64, DbError>;

    /// Request counts grouped by exact parameter set, most frequent first.
    ///
    /// Ties are ordered ascending by `(words, multiples, limit)`, lists
    /// compared element by element and words in byte order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    async fn parameter_stats(&self) -> Result<Vec<ParameterStats>, DbError>;

    /// Occurrence counts grouped by individual word, most frequent first.
    ///
    /// Ties are ordered ascending by word, in byte order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    async fn word_stats(&self) -> Result<Vec<WordStats>, DbError>;
}

/// Most frequent first; ties ascending by `(words, multiples, limit)`
/// compared element by element in byte order.
pub(crate) fn sort_parameter_stats(stats: &mut [ParameterStats]) {
    stats.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.words.cmp(&b.words))
            .then_with(|| a.multiples.cmp(&b.multiples))
            .then_with(|| a.limit.cmp(&b.limit))
    });
}

/// Most frequent first; ties ascending by word in byte order.
pub(crate) fn sort_word_stats(stats: &mut [WordStats]) {
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(words: &[&str], multiples: &[i64], limit: i64, count: u64) -> ParameterStats {
        ParameterStats {
            words: words.iter().map(|w| (*w).to_owned()).collect(),
            multiples: multiples.to_vec(),
            limit,
            count,
        }
    }

    fn word(word: &str, count: u64) -> WordStats {
        WordStats {
            word: word.to_owned(),
            count,
        }
    }

    #[test]
    fn parameter_ties_compare_lists_element_by_element() {
        // By smallest element, ["b", "a"] would sort before ["a", "z"].
        let mut stats = vec![
            row(&["b", "a"], &[2, 3], 10, 1),
            row(&["a", "z"], &[2, 3], 10, 1),
            row(&["Fizz"], &[3], 9, 4),
        ];
        sort_parameter_stats(&mut stats);

        let order: Vec<(Vec<String>, u64)> = stats.into_iter().map(|s| (s.words, s.count)).collect();
        assert_eq!(
            order,
            vec![
                (vec![String::from("Fizz")], 4),
                (vec![String::from("a"), String::from("z")], 1),
                (vec![String::from("b"), String::from("a")], 1),
            ]
        );
    }

    #[test]
    fn parameter_ties_fall_through_to_multiples_then_limit() {
        let mut stats = vec![
            row(&["x"], &[5, 1], 10, 2),
            row(&["x"], &[1, 9], 20, 2),
            row(&["x"], &[1, 9], 10, 2),
        ];
        sort_parameter_stats(&mut stats);

        let keys: Vec<(Vec<i64>, i64)> = stats.into_iter().map(|s| (s.multiples, s.limit)).collect();
        assert_eq!(keys, vec![(vec![1, 9], 10), (vec![1, 9], 20), (vec![5, 1], 10)]);
    }

    #[test]
    fn word_ties_use_byte_order() {
        let mut stats = vec![word("fizz", 2), word("Fizz", 2), word("Buzz", 5)];
        sort_word_stats(&mut stats);

        let order: Vec<&str> = stats.iter().map(|s| s.word.as_str()).collect();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(order, vec!["Buzz", "Fizz", "fizz"]);
    }
}
