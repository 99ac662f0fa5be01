//! The recording service: generate a sequence, log the request, and serve
//! aggregate statistics.
//!
//! Storage failures are logged here with their full cause. The returned
//! [`CoreError`] displays a generic message so the HTTP layer can forward it
//! without leaking driver details.

use std::sync::Arc;

use fizzbuzz_db::StatsStore;
use fizzbuzz_types::{FizzBuzzParams, RequestRecord, Sequence, StatsReport};
use tracing::{debug, error};

use crate::error::CoreError;
use crate::sequence;

/// Sequence engine bound to a request log.
#[derive(Clone)]
pub struct FizzBuzzService {
    store: Arc<dyn StatsStore>,
}

impl FizzBuzzService {
    /// Create a service recording into `store`.
    pub fn new(store: Arc<dyn StatsStore>) -> Self {
        Self { store }
    }

    /// Name of the backing store.
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Generate the sequence for `params` and record the request.
    ///
    /// If recording fails the sequence is discarded and
    /// [`CoreError::Record`] is returned.
    pub async fn process(&self, params: &FizzBuzzParams) -> Result<Sequence, CoreError> {
        let seq = sequence::generate_for(params);

        let record = RequestRecord::now(params.clone());
        if let Err(e) = self.store.record(&record).await {
            error!(
                error = %e,
                backend = self.store.backend(),
                limit = params.limit,
                "Error saving request to storage"
            );
            return Err(CoreError::Record { source: e });
        }

        debug!(limit = params.limit, entries = seq.len(), "Processed request");
        Ok(seq)
    }

    /// Total requests, per-parameter-set counts, and per-word counts.
    pub async fn stats(&self) -> Result<StatsReport, CoreError> {
        let total_requests = self
            .store
            .total_requests()
            .await
            .map_err(|e| self.stats_error("total requests", e))?;

        let request_stats = self
            .store
            .parameter_stats()
            .await
            .map_err(|e| self.stats_error("request stats", e))?;

        let words_stats = self
            .store
            .word_stats()
            .await
            .map_err(|e| self.stats_error("words stats", e))?;

        Ok(StatsReport {
            total_requests,
            request_stats,
            words_stats,
        })
    }

    fn stats_error(&self, what: &'static str, source: fizzbuzz_db::DbError) -> CoreError {
        error!(
            error = %source,
            backend = self.store.backend(),
            what,
            "Error retrieving stats from storage"
        );
        CoreError::Stats { what, source }
    }
}
