//! # Storage Traits
//!
//! The domain layer only sees whole-document load/save. Implementations decide
//! where the document lives; atomicity across load and save is provided by
//! [`super::LedgerStore`].

use anyhow::Result;
use async_trait::async_trait;

use super::ledger::Ledger;

#[async_trait]
pub trait LedgerStorage: Send + Sync {
    /// Read the current ledger document
    async fn load(&self) -> Result<Ledger>;

    /// Replace the stored ledger document
    async fn save(&self, ledger: &Ledger) -> Result<()>;
}
