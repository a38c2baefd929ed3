//! Helpers for driving the router in tests

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::ServerConfig;
use crate::storage::MemoryConnection;
use crate::{create_router, AppState};

/// Full router over an empty in-memory ledger, plus its state for seeding
pub fn test_app() -> (Router, AppState) {
    let state = AppState::with_storage(Arc::new(MemoryConnection::default()));
    let app = create_router(state.clone(), &ServerConfig::default())
        .expect("default config builds a router");
    (app, state)
}

pub async fn get_json(app: &Router, uri: &str) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
    let request = Request::builder().uri(uri).method(Method::GET).body(Body::empty())?;
    send(app, request).await
}

pub async fn post_json<T: Serialize>(
    app: &Router,
    uri: &str,
    body: &T,
) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
    let request = Request::builder()
        .uri(uri)
        .method(Method::POST)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&body)?))
}
