use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use super::ledger::Ledger;
use super::traits::LedgerStorage;

/// Ledger kept in process memory; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryConnection {
    ledger: Mutex<Ledger>,
}

impl MemoryConnection {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger: Mutex::new(ledger) }
    }
}

#[async_trait]
impl LedgerStorage for MemoryConnection {
    async fn load(&self) -> Result<Ledger> {
        let ledger = self
            .ledger
            .lock()
            .map_err(|_| anyhow::anyhow!("In-memory ledger lock poisoned"))?;
        Ok(ledger.clone())
    }

    async fn save(&self, ledger: &Ledger) -> Result<()> {
        let mut stored = self
            .ledger
            .lock()
            .map_err(|_| anyhow::anyhow!("In-memory ledger lock poisoned"))?;
        *stored = ledger.clone();
        Ok(())
    }
}
