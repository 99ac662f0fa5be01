//! In-memory implementation of [`StatsStore`].
//!
//! Keeps the request log in a `Vec` behind a [`tokio::sync::RwLock`] and
//! aggregates on read. Nothing survives a restart; used for development
//! and as the test double for the service and HTTP layers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use fizzbuzz_types::{FizzBuzzParams, ParameterStats, RequestRecord, WordStats};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::{self, StatsStore};

/// Request log held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    records: RwLock<Vec<RequestRecord>>,
}

impl MemoryStatsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record in insertion order.
    pub async fn records(&self) -> Vec<RequestRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl StatsStore for MemoryStatsStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn record(&self, record: &RequestRecord) -> Result<(), DbError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn total_requests(&self) -> Result<u64, DbError> {
        let len = self.records.read().await.len();
        Ok(u64::try_from(len).unwrap_or(u64::MAX))
    }

    async fn parameter_stats(&self) -> Result<Vec<ParameterStats>, DbError> {
        let records = self.records.read().await;

        let mut counts: BTreeMap<&FizzBuzzParams, u64> = BTreeMap::new();
        for record in records.iter() {
            let count = counts.entry(&record.params).or_insert(0);
            *count = count.saturating_add(1);
        }

        let mut stats: Vec<ParameterStats> = counts
            .into_iter()
            .map(|(params, count)| ParameterStats {
                words: params.words.clone(),
                multiples: params.multiples.clone(),
                limit: params.limit,
                count,
            })
            .collect();
        store::sort_parameter_stats(&mut stats);
        Ok(stats)
    }

    async fn word_stats(&self) -> Result<Vec<WordStats>, DbError> {
        let records = self.records.read().await;

        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for word in records.iter().flat_map(|r| r.params.words.iter()) {
            let count = counts.entry(word.as_str()).or_insert(0);
            *count = count.saturating_add(1);
        }

        let mut stats: Vec<WordStats> = counts
            .into_iter()
            .map(|(word, count)| WordStats {
                word: word.to_owned(),
                count,
            })
            .collect();
        store::sort_word_stats(&mut stats);
        Ok(stats)
    }
}
