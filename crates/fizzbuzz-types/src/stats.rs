//! Aggregate statistics over the persisted request log.
//!
//! These are the shapes served by `GET /stats`. The count on
//! [`ParameterStats`] is serialized as `total_requests`, matching the wire
//! format clients already consume.

use serde::{Deserialize, Serialize};

/// Number of requests made with one exact parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterStats {
    /// Replacement words of the parameter set.
    pub words: Vec<String>,
    /// Divisors of the parameter set.
    pub multiples: Vec<i64>,
    /// Upper bound of the parameter set.
    pub limit: i64,
    /// How many requests used exactly this set.
    #[serde(rename = "total_requests")]
    pub count: u64,
}

/// Number of times a word appeared across all recorded requests.
///
/// Each occurrence counts: a request whose word list contains the same word
/// twice contributes two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    /// The replacement word.
    pub word: String,
    /// Number of occurrences.
    pub count: u64,
}

/// Combined body of `GET /stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Total number of recorded requests.
    pub total_requests: u64,
    /// Per-parameter-set counts, most frequent first.
    pub request_stats: Vec<ParameterStats>,
    /// Per-word counts, most frequent first.
    pub words_stats: Vec<WordStats>,
}
