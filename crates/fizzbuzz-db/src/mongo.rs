//! `MongoDB` implementation of [`StatsStore`].
//!
//! Each request is one document in a collection:
//!
//! ```text
//! { words: [string], multiples: [int64], limit: int64, recorded_at: date }
//! ```
//!
//! Statistics are computed server-side with aggregation pipelines
//! (`$group`/`$sort`/`$project`, plus `$unwind` for word counts).

use async_trait::async_trait;
use fizzbuzz_types::{ParameterStats, RequestRecord, WordStats};
use futures::TryStreamExt;
use mongodb::bson::{self, Document, doc};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::error::DbError;
use crate::store::{self, StatsStore};

/// Default database name.
const DEFAULT_DATABASE: &str = "fizzbuzz";

/// Default collection name.
const DEFAULT_COLLECTION: &str = "fizzbuzz_records";

/// Connection settings for the `MongoDB` store.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`.
    pub uri: String,
    /// Database holding the request collection.
    pub database: String,
    /// Collection holding one document per request.
    pub collection: String,
}

impl MongoConfig {
    /// Create a configuration with the default database and collection.
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_owned(),
            database: DEFAULT_DATABASE.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
        }
    }

    /// Set the database name.
    #[must_use]
    pub fn with_database(mut self, database: &str) -> Self {
        database.clone_into(&mut self.database);
        self
    }

    /// Set the collection name.
    #[must_use]
    pub fn with_collection(mut self, collection: &str) -> Self {
        collection.clone_into(&mut self.collection);
        self
    }
}

/// Stored shape of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RequestDocument {
    words: Vec<String>,
    multiples: Vec<i64>,
    limit: i64,
    recorded_at: bson::DateTime,
}

impl From<&RequestRecord> for RequestDocument {
    fn from(record: &RequestRecord) -> Self {
        Self {
            words: record.params.words.clone(),
            multiples: record.params.multiples.clone(),
            limit: record.params.limit,
            recorded_at: bson::DateTime::from_millis(record.recorded_at.timestamp_millis()),
        }
    }
}

/// Output shape of the parameter-set pipeline.
#[derive(Debug, Deserialize)]
struct ParameterGroup {
    words: Vec<String>,
    multiples: Vec<i64>,
    limit: i64,
    count: i64,
}

/// Output shape of the word pipeline.
#[derive(Debug, Deserialize)]
struct WordGroup {
    word: String,
    count: i64,
}

/// Request log backed by a `MongoDB` collection.
#[derive(Clone)]
pub struct MongoStatsStore {
    client: Client,
    collection: Collection<RequestDocument>,
}

impl MongoStatsStore {
    /// Connect to `MongoDB` and verify the server answers a `ping`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Mongo`] if the URI is invalid or the server is
    /// unreachable.
    pub async fn connect(config: &MongoConfig) -> Result<Self, DbError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(
            database = config.database.as_str(),
            collection = config.collection.as_str(),
            "Connected to MongoDB"
        );

        let collection = database.collection::<RequestDocument>(&config.collection);
        Ok(Self { client, collection })
    }

    /// Drop every document in the collection. Used by integration tests.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Mongo`] if the delete fails.
    pub async fn clear(&self) -> Result<(), DbError> {
        self.collection.delete_many(doc! {}).await?;
        Ok(())
    }

    /// Shut the client down, waiting for in-flight operations.
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB client closed");
    }

    /// Run a pipeline and collect the raw result documents.
    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>, DbError> {
        let cursor = self.collection.aggregate(pipeline).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }
}

#[async_trait]
impl StatsStore for MongoStatsStore {
    fn backend(&self) -> &'static str {
        "mongo"
    }

    async fn record(&self, record: &RequestRecord) -> Result<(), DbError> {
        self.collection
            .insert_one(RequestDocument::from(record))
            .await?;
        tracing::debug!(limit = record.params.limit, "Recorded request");
        Ok(())
    }

    async fn total_requests(&self) -> Result<u64, DbError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn parameter_stats(&self) -> Result<Vec<ParameterStats>, DbError> {
        let pipeline = vec![
            doc! { "$group": {
                "_id": { "words": "$words", "multiples": "$multiples", "limit": "$limit" },
                "count": { "$sum": 1_i64 },
            }},
            doc! { "$sort": { "count": -1 } },
            doc! { "$project": {
                "_id": 0,
                "words": "$_id.words",
                "multiples": "$_id.multiples",
                "limit": "$_id.limit",
                "count": 1,
            }},
        ];

        let mut stats = self
            .aggregate(pipeline)
            .await?
            .into_iter()
            .map(|d| -> Result<ParameterStats, DbError> {
                let group: ParameterGroup = bson::from_document(d)?;
                Ok(ParameterStats {
                    words: group.words,
                    multiples: group.multiples,
                    limit: group.limit,
                    count: to_count(group.count),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // `$sort` compares arrays by their smallest element.
        store::sort_parameter_stats(&mut stats);
        Ok(stats)
    }

    async fn word_stats(&self) -> Result<Vec<WordStats>, DbError> {
        let pipeline = vec![
            doc! { "$unwind": "$words" },
            doc! { "$group": { "_id": "$words", "count": { "$sum": 1_i64 } } },
            doc! { "$sort": { "count": -1, "_id": 1 } },
            doc! { "$project": { "_id": 0, "word": "$_id", "count": 1 } },
        ];

        let mut stats = self
            .aggregate(pipeline)
            .await?
            .into_iter()
            .map(|d| -> Result<WordStats, DbError> {
                let group: WordGroup = bson::from_document(d)?;
                Ok(WordStats {
                    word: group.word,
                    count: to_count(group.count),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        store::sort_word_stats(&mut stats);
        Ok(stats)
    }
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use fizzbuzz_types::FizzBuzzParams;

    use super::*;

    #[test]
    fn config_defaults_and_overrides() {
        let config = MongoConfig::new("mongodb://localhost:27017");
        assert_eq!(config.database, "fizzbuzz");
        assert_eq!(config.collection, "fizzbuzz_records");

        let config = config.with_database("stats").with_collection("log");
        assert_eq!(config.database, "stats");
        assert_eq!(config.collection, "log");
    }

    #[test]
    fn document_keeps_record_fields() {
        let recorded_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).single().unwrap_or_default();
        let record = RequestRecord {
            params: FizzBuzzParams::new(vec![String::from("Fizz")], vec![3], 9),
            recorded_at,
        };
        let document = RequestDocument::from(&record);
        assert_eq!(document.words, vec![String::from("Fizz")]);
        assert_eq!(document.multiples, vec![3]);
        assert_eq!(document.limit, 9);
        assert_eq!(
            document.recorded_at.timestamp_millis(),
            recorded_at.timestamp_millis()
        );
    }
}
