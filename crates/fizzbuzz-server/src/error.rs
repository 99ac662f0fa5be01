//! Error types for the FizzBuzz server binary.
//!
//! [`AppError`] wraps every failure that can abort startup or serving so
//! that `main` can propagate with `?`.

/// Top-level error for the server binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: fizzbuzz_core::ConfigError,
    },

    /// Connecting to or migrating the storage backend failed.
    #[error("storage error: {source}")]
    Storage {
        /// The underlying database error.
        #[from]
        source: fizzbuzz_db::DbError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: fizzbuzz_api::ServerError,
    },
}
