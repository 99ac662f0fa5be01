//! REST API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/fizzbuzz` | Compute a sequence and record the request |
//! | `GET` | `/stats` | Aggregate request statistics |
//! | `GET` | `/health` | Liveness probe |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use fizzbuzz_types::FizzBuzzResponse;

use crate::error::ApiError;
use crate::request::{self, FizzBuzzQuery};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /fizzbuzz
// ---------------------------------------------------------------------------

/// Compute the sequence for the submitted parameters.
///
/// Parameters are read from the query string, or from a JSON body when the
/// query string carries none. Responds `{"result": "[1 2 Fizz 4 Buzz]"}`.
///
/// # Errors
///
/// - 400 if the query string does not parse, or the parameters are
///   missing, malformed, inconsistent, or the limit exceeds
///   [`MAX_LIMIT`](fizzbuzz_core::MAX_LIMIT).
/// - 500 if the request could not be recorded; no result is returned.
pub async fn fizzbuzz(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FizzBuzzQuery>, QueryRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let params = request::bind(query, &body).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected fizzbuzz request");
    })?;

    let sequence = state.service.process(&params).await?;

    Ok(Json(FizzBuzzResponse::from(&sequence)))
}

// ---------------------------------------------------------------------------
// GET /stats
// ---------------------------------------------------------------------------

/// Return the total request count, per-parameter-set counts, and per-word
/// counts, most frequent first.
///
/// # Errors
///
/// 500 if any aggregate read fails.
pub async fn stats(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let report = state.service.stats().await?;
    Ok(Json(report))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe. Does not touch storage.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "storage": state.service.backend(),
    }))
}
