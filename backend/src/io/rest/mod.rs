//! # REST API Interface Layer
//!
//! HTTP endpoints under `/api`. Handlers stay thin: log the request, call one
//! service, translate the result. Every mutating endpoint answers with a JSON
//! body carrying a boolean `success`.

pub mod export_apis;
pub mod logging_apis;
pub mod party_apis;
pub mod responses;
pub mod stats_apis;
pub mod transaction_apis;

#[cfg(test)]
pub mod test_utils;

use axum::Router;

use crate::AppState;

/// Every API route, relative to `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(party_apis::router())
        .merge(transaction_apis::router())
        .merge(stats_apis::router())
        .merge(export_apis::router())
        .merge(logging_apis::router())
}
