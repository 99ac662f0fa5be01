//! Request parameters and the per-request persisted record.
//!
//! A request is an ordered list of divisor/word pairs plus an upper bound.
//! The pairs are carried as two parallel lists (`multiples` and `words`)
//! because that is how clients submit them and how the stores persist them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters of one FizzBuzz computation.
///
/// After HTTP validation both lists are non-empty and of equal length, every
/// divisor is positive, and `limit >= 1`. The engine itself accepts any
/// values and degrades gracefully (see `fizzbuzz_core::sequence`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FizzBuzzParams {
    /// Replacement words, paired positionally with `multiples`.
    pub words: Vec<String>,
    /// Divisors, paired positionally with `words`.
    pub multiples: Vec<i64>,
    /// Inclusive upper bound of the sequence.
    pub limit: i64,
}

impl FizzBuzzParams {
    /// Build a parameter set from its three components.
    pub const fn new(words: Vec<String>, multiples: Vec<i64>, limit: i64) -> Self {
        Self {
            words,
            multiples,
            limit,
        }
    }

    /// Iterate the divisor/word pairs in submission order.
    ///
    /// If the lists differ in length, pairing stops at the shorter one.
    pub fn pairs(&self) -> impl Iterator<Item = (i64, &str)> {
        self.multiples
            .iter()
            .copied()
            .zip(self.words.iter().map(String::as_str))
    }
}

/// One persisted stats row: the parameters of a processed request and the
/// time it was recorded. Rows are insert-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// The parameters the request was processed with.
    #[serde(flatten)]
    pub params: FizzBuzzParams,
    /// Wall-clock time at which the request was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl RequestRecord {
    /// Stamp a parameter set with the current time.
    pub fn now(params: FizzBuzzParams) -> Self {
        Self {
            params,
            recorded_at: Utc::now(),
        }
    }
}
