//! Shared application state for the HTTP server.

use fizzbuzz_core::FizzBuzzService;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Holds no mutable state of its own; the service's store
/// manages its own connection pool.
#[derive(Clone)]
pub struct AppState {
    /// The sequence engine bound to the request log.
    pub service: FizzBuzzService,
}

impl AppState {
    /// Create application state around a service.
    pub const fn new(service: FizzBuzzService) -> Self {
        Self { service }
    }
}
