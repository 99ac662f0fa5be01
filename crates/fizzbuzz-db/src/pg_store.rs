//! `PostgreSQL` implementation of [`StatsStore`].
//!
//! Requests live in the `fizzbuzz_requests` table (see `migrations/`).
//! Parameter statistics are a `GROUP BY` over the array columns; word
//! statistics unnest the `words` array first so every occurrence counts.

use async_trait::async_trait;
use fizzbuzz_types::{ParameterStats, RequestRecord, WordStats};

use crate::error::DbError;
use crate::postgres::PostgresPool;
use crate::store::StatsStore;

/// Request log backed by the `fizzbuzz_requests` table.
#[derive(Clone)]
pub struct PgStatsStore {
    pool: PostgresPool,
}

impl PgStatsStore {
    /// Create a store over an already-migrated pool.
    pub const fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub const fn pool(&self) -> &PostgresPool {
        &self.pool
    }
}

#[async_trait]
impl StatsStore for PgStatsStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn record(&self, record: &RequestRecord) -> Result<(), DbError> {
        sqlx::query(
            r"INSERT INTO fizzbuzz_requests (words, multiples, upper_limit, recorded_at)
              VALUES ($1, $2, $3, $4)",
        )
        .bind(&record.params.words)
        .bind(&record.params.multiples)
        .bind(record.params.limit)
        .bind(record.recorded_at)
        .execute(self.pool.pool())
        .await?;

        tracing::debug!(limit = record.params.limit, "Recorded request");
        Ok(())
    }

    async fn total_requests(&self) -> Result<u64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fizzbuzz_requests")
            .fetch_one(self.pool.pool())
            .await?;
        Ok(to_count(count))
    }

    async fn parameter_stats(&self) -> Result<Vec<ParameterStats>, DbError> {
        let rows = sqlx::query_as::<_, ParameterRow>(
            r#"SELECT words, multiples, upper_limit, COUNT(*) AS request_count
              FROM fizzbuzz_requests
              GROUP BY words, multiples, upper_limit
              ORDER BY request_count DESC, words COLLATE "C", multiples, upper_limit"#,
        )
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows.into_iter().map(ParameterRow::into_stats).collect())
    }

    async fn word_stats(&self) -> Result<Vec<WordStats>, DbError> {
        let rows = sqlx::query_as::<_, WordRow>(
            r#"SELECT u.word AS word, COUNT(*) AS word_count
              FROM fizzbuzz_requests
              CROSS JOIN LATERAL UNNEST(words) AS u(word)
              GROUP BY u.word
              ORDER BY word_count DESC, u.word COLLATE "C""#,
        )
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| WordStats {
                word: row.word,
                count: to_count(row.word_count),
            })
            .collect())
    }
}

/// One row of the parameter-set aggregation.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ParameterRow {
    words: Vec<String>,
    multiples: Vec<i64>,
    upper_limit: i64,
    request_count: i64,
}

impl ParameterRow {
    fn into_stats(self) -> ParameterStats {
        ParameterStats {
            words: self.words,
            multiples: self.multiples,
            limit: self.upper_limit,
            count: to_count(self.request_count),
        }
    }
}

/// One row of the word aggregation.
#[derive(Debug, Clone, sqlx::FromRow)]
struct WordRow {
    word: String,
    word_count: i64,
}

/// `COUNT(*)` is a `BIGINT`; it is never negative.
fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
