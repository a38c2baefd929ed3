use tracing::debug;

use super::errors::LedgerError;
use crate::storage::LedgerStore;
use shared::DashboardStats;

/// Aggregates for the dashboard strip
#[derive(Clone)]
pub struct StatsService {
    store: LedgerStore,
}

impl StatsService {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Party counts and the sum of balances on each side.
    ///
    /// The cash balance is not tracked and is always zero.
    pub async fn dashboard(&self) -> Result<DashboardStats, LedgerError> {
        let ledger = self.store.read().await?;

        let stats = DashboardStats {
            customers_count: ledger.customers.len(),
            suppliers_count: ledger.suppliers.len(),
            customers_debt: total_balance(ledger.customers.iter().map(|c| c.balance)),
            suppliers_debt: total_balance(ledger.suppliers.iter().map(|s| s.balance)),
            cash_balance: 0.0,
        };

        debug!("Dashboard stats: {:?}", stats);
        Ok(stats)
    }
}

fn total_balance(balances: impl Iterator<Item = f64>) -> f64 {
    (balances.sum::<f64>() * 100.0).round() / 100.0
}
