//! Shared type definitions for the FizzBuzz service.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace: the parameters a client submits, the sequence the engine
//! produces, the record persisted per request, and the aggregate statistics
//! served by `GET /stats`.
//!
//! # Modules
//!
//! - [`params`] -- Request parameters and the persisted request record
//! - [`sequence`] -- The generated sequence and its wire rendering
//! - [`stats`] -- Aggregate statistics rows and the combined report

pub mod params;
pub mod sequence;
pub mod stats;

// Re-export all public types at crate root for convenience.
pub use params::{FizzBuzzParams, RequestRecord};
pub use sequence::{FizzBuzzResponse, Sequence};
pub use stats::{ParameterStats, StatsReport, WordStats};
