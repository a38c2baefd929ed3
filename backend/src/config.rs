//! # Server Configuration
//!
//! Settings are read from the environment once at start-up. Every value has a
//! default suitable for running from the workspace root.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DATA_FILE: &str = "data/database.json";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,kinash_backend=debug";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to (`KINASH_ADDR`)
    pub addr: SocketAddr,
    /// Ledger document location (`KINASH_DATA_FILE`)
    pub data_file: PathBuf,
    /// Built client served for non-API paths (`KINASH_STATIC_DIR`)
    pub static_dir: PathBuf,
    /// Origin allowed to call the API cross-origin (`KINASH_CORS_ORIGIN`)
    pub cors_origin: String,
}

impl ServerConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let addr_raw = value("KINASH_ADDR", DEFAULT_ADDR);
        let addr = addr_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("KINASH_ADDR is not a socket address: {}", addr_raw))?;

        Ok(Self {
            addr,
            data_file: PathBuf::from(value("KINASH_DATA_FILE", DEFAULT_DATA_FILE)),
            static_dir: PathBuf::from(value("KINASH_STATIC_DIR", DEFAULT_STATIC_DIR)),
            cors_origin: value("KINASH_CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}
