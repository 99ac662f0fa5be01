//! Request statistics storage for the FizzBuzz service.
//!
//! Every processed request is appended to a log; `GET /stats` is answered
//! with three aggregate reads over that log. The [`StatsStore`] trait is the
//! seam between the service and the backing store, with three
//! interchangeable implementations:
//!
//! ```text
//! FizzBuzzService
//!     |
//!     +-- Arc<dyn StatsStore>
//!         |-- PgStatsStore     (PostgreSQL, GROUP BY / UNNEST)
//!         |-- MongoStatsStore  (MongoDB, aggregation pipelines)
//!         +-- MemoryStatsStore (in-process, development and tests)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- The [`StatsStore`] trait
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`pg_store`] -- `PostgreSQL` implementation of [`StatsStore`]
//! - [`mongo`] -- `MongoDB` implementation of [`StatsStore`]
//! - [`memory`] -- In-memory implementation of [`StatsStore`]
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod mongo;
pub mod pg_store;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use memory::MemoryStatsStore;
pub use mongo::{MongoConfig, MongoStatsStore};
pub use pg_store::PgStatsStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use store::StatsStore;
