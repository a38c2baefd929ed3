//! Test utilities with RAII cleanup of on-disk ledgers

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use super::json::JsonConnection;
use super::memory::MemoryConnection;
use super::LedgerStore;

/// Temporary directory that is removed when the environment is dropped
pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        Ok(Self { _temp_dir: temp_dir, base_path })
    }

    pub fn json_connection(&self) -> Result<JsonConnection> {
        JsonConnection::open(self.base_path.join("database.json"))
    }

    pub fn json_store(&self) -> Result<LedgerStore> {
        Ok(LedgerStore::new(Arc::new(self.json_connection()?)))
    }
}

/// A store backed by a fresh in-memory ledger
pub fn memory_store() -> LedgerStore {
    LedgerStore::new(Arc::new(MemoryConnection::default()))
}
