//! # Kinash Backend
//!
//! HTTP backend of the Kinash shop ledger: customers, suppliers and the debts
//! recorded against them.
//!
//! ## Architecture
//!
//! ```text
//! Yew frontend
//!     ↓
//! IO Layer (REST handlers under /api)
//!     ↓
//! Domain Layer (party, transaction, stats and report services)
//!     ↓
//! Storage Layer (one JSON ledger document behind a lock)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use config::ServerConfig;
use domain::{PartyService, ReportService, StatsService, TransactionService};
use storage::{JsonConnection, LedgerStorage, LedgerStore};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub party_service: PartyService,
    pub transaction_service: TransactionService,
    pub stats_service: StatsService,
    pub report_service: ReportService,
}

impl AppState {
    /// Wire every service to one shared store over `backend`
    pub fn with_storage(backend: Arc<dyn LedgerStorage>) -> Self {
        let store = LedgerStore::new(backend);
        Self {
            party_service: PartyService::new(store.clone()),
            transaction_service: TransactionService::new(store.clone()),
            stats_service: StatsService::new(store.clone()),
            report_service: ReportService::new(store),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Opening ledger at {}", config.data_file.display());
    let connection = JsonConnection::open(&config.data_file)?;

    info!("Setting up domain services");
    Ok(AppState::with_storage(Arc::new(connection)))
}

/// Create the Axum router: the API under `/api`, the built client everywhere else
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    // CORS setup for the trunk dev server
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::api_router())
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(app_state))
}
