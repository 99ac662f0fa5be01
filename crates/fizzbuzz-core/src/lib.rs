//! Sequence engine, recording service, and configuration for the FizzBuzz
//! service.
//!
//! # Modules
//!
//! - [`sequence`] -- Pure sequence generation from divisor/word pairs
//! - [`service`] -- [`FizzBuzzService`]: generate, record, and aggregate
//! - [`config`] -- Typed YAML configuration with environment overrides
//! - [`error`] -- Service error types

pub mod config;
pub mod error;
pub mod sequence;
pub mod service;

// Re-export primary types for convenience.
pub use config::{ConfigError, FizzBuzzConfig, StorageBackend};
pub use error::CoreError;
pub use sequence::{MAX_LIMIT, generate};
pub use service::FizzBuzzService;
