//! HTTP API for the FizzBuzz service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /fizzbuzz`** -- compute a sequence from query parameters or a
//!   JSON body and record the request
//! - **`GET /stats`** -- total request count plus per-parameter-set and
//!   per-word counts
//! - **`GET /health`** -- liveness probe
//!
//! # Architecture
//!
//! Handlers bind and validate the request ([`request`]), then delegate to
//! the [`FizzBuzzService`](fizzbuzz_core::FizzBuzzService) held in the
//! shared [`AppState`]. Failures are mapped to HTTP responses by
//! [`ApiError`].

pub mod error;
pub mod handlers;
pub mod request;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
