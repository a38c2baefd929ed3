//! # Storage Layer
//!
//! Persists the ledger document. Backends implement [`LedgerStorage`];
//! services talk to a [`LedgerStore`], which serialises every access so a
//! read-modify-write can never interleave with another one.

pub mod json;
pub mod ledger;
pub mod memory;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

pub use json::JsonConnection;
pub use ledger::Ledger;
pub use memory::MemoryConnection;
pub use traits::LedgerStorage;

/// Shared handle to the ledger used by all domain services
#[derive(Clone)]
pub struct LedgerStore {
    backend: Arc<dyn LedgerStorage>,
    lock: Arc<Mutex<()>>,
}

impl LedgerStore {
    pub fn new(backend: Arc<dyn LedgerStorage>) -> Self {
        Self {
            backend,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Snapshot of the ledger
    pub async fn read(&self) -> Result<Ledger> {
        let _guard = self.lock.lock().await;
        self.backend.load().await
    }

    /// Load, apply `change`, and save, all under the store lock.
    ///
    /// Nothing is written when `change` fails.
    pub async fn modify<F, R, E>(&self, change: F) -> Result<R, E>
    where
        F: FnOnce(&mut Ledger) -> Result<R, E> + Send,
        R: Send,
        E: From<anyhow::Error> + Send,
    {
        let _guard = self.lock.lock().await;
        let mut ledger = self.backend.load().await?;
        let result = change(&mut ledger)?;
        self.backend.save(&ledger).await?;
        Ok(result)
    }
}
