//! Error types for the recording service.
//!
//! The variants carry the storage cause so it can be logged, but their
//! `Display` text is generic: it is safe to show to clients.

use fizzbuzz_db::DbError;

/// Errors returned by [`FizzBuzzService`](crate::FizzBuzzService).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The sequence was computed but the request could not be recorded.
    #[error("could not save request to storage")]
    Record {
        /// The underlying storage error.
        #[source]
        source: DbError,
    },

    /// An aggregate statistics read failed.
    #[error("could not retrieve {what} from storage")]
    Stats {
        /// Which aggregate was being read.
        what: &'static str,
        /// The underlying storage error.
        #[source]
        source: DbError,
    },
}
