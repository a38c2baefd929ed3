use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::ledger::Ledger;
use super::traits::LedgerStorage;

/// JsonConnection keeps the ledger as one pretty-printed JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonConnection {
    path: PathBuf,
}

impl JsonConnection {
    /// Open the ledger file, creating its directory and a seeded document
    /// when either is missing
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
            }
        }

        if !path.exists() {
            info!("No ledger at {}, writing a fresh one", path.display());
            let contents = serde_json::to_string_pretty(&Ledger::default())?;
            fs::write(&path, contents)
                .with_context(|| format!("Failed to create ledger file {}", path.display()))?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl LedgerStorage for JsonConnection {
    async fn load(&self) -> Result<Ledger> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read ledger file {}", self.path.display()))?;

        let ledger = serde_json::from_str(&contents)
            .with_context(|| format!("Ledger file {} is not valid JSON", self.path.display()))?;

        Ok(ledger)
    }

    async fn save(&self, ledger: &Ledger) -> Result<()> {
        let contents = serde_json::to_string_pretty(ledger)?;

        // Write beside the target and rename so readers never see a partial file
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, contents)
            .await
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .with_context(|| format!("Failed to replace ledger file {}", self.path.display()))?;

        debug!("Saved ledger to {}", self.path.display());
        Ok(())
    }
}
