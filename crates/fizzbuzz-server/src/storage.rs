//! Storage backend selection.
//!
//! Turns the `storage` config section into a connected
//! [`StatsStore`] and keeps the concrete handle around so it can be shut
//! down cleanly once the server stops.

use std::sync::Arc;

use fizzbuzz_core::StorageBackend;
use fizzbuzz_core::config::StorageConfig;
use fizzbuzz_db::{
    MemoryStatsStore, MongoConfig, MongoStatsStore, PgStatsStore, PostgresConfig, PostgresPool,
    StatsStore,
};
use tracing::info;

use crate::error::AppError;

/// A connected backend plus whatever it needs for shutdown.
pub enum Storage {
    /// In-process log.
    Memory(Arc<MemoryStatsStore>),
    /// `PostgreSQL` pool, already migrated.
    Postgres(PgStatsStore),
    /// `MongoDB` client.
    Mongo(MongoStatsStore),
}

impl Storage {
    /// Connect the backend selected in `config`.
    ///
    /// For `PostgreSQL` this also applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backend is unreachable or the
    /// migrations fail.
    pub async fn connect(config: &StorageConfig) -> Result<Self, AppError> {
        match config.backend {
            StorageBackend::Memory => {
                info!("Using in-memory request log; records are lost on restart");
                Ok(Self::Memory(Arc::new(MemoryStatsStore::new())))
            }
            StorageBackend::Postgres => {
                let pg_config = PostgresConfig::new(&config.postgres_url)
                    .with_max_connections(config.max_connections);
                let pool = PostgresPool::connect(&pg_config).await?;
                pool.run_migrations().await?;
                Ok(Self::Postgres(PgStatsStore::new(pool)))
            }
            StorageBackend::Mongo => {
                let mongo_config = MongoConfig::new(&config.mongo_uri)
                    .with_database(&config.mongo_database)
                    .with_collection(&config.mongo_collection);
                let store = MongoStatsStore::connect(&mongo_config).await?;
                Ok(Self::Mongo(store))
            }
        }
    }

    /// Shared trait-object handle for the service.
    pub fn store(&self) -> Arc<dyn StatsStore> {
        match self {
            Self::Memory(store) => Arc::clone(store) as Arc<dyn StatsStore>,
            Self::Postgres(store) => Arc::new(store.clone()),
            Self::Mongo(store) => Arc::new(store.clone()),
        }
    }

    /// Release connections.
    pub async fn close(self) {
        match self {
            Self::Memory(_) => {}
            Self::Postgres(store) => store.pool().close().await,
            Self::Mongo(store) => store.close().await,
        }
    }
}
