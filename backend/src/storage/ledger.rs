use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::{Category, Party, PartyKind, Settings, Transaction};

/// The whole persisted document: parties, their transactions and lookup data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub customers: Vec<Party>,
    #[serde(default)]
    pub suppliers: Vec<Party>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub settings: Settings,
    /// Top-level sections this application does not manage (users, reminders, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Ledger {
    /// A fresh ledger seeded with the stock categories
    fn default() -> Self {
        let categories = vec![
            Category { id: 1, name: "Regular".to_string(), kind: PartyKind::Customer },
            Category { id: 2, name: "VIP".to_string(), kind: PartyKind::Customer },
            Category { id: 3, name: "Regular".to_string(), kind: PartyKind::Supplier },
            Category { id: 4, name: "Premium".to_string(), kind: PartyKind::Supplier },
        ];

        Self {
            customers: Vec::new(),
            suppliers: Vec::new(),
            transactions: Vec::new(),
            categories,
            settings: Settings::default(),
            extra: Map::new(),
        }
    }
}

impl Ledger {
    pub fn parties(&self, kind: PartyKind) -> &[Party] {
        match kind {
            PartyKind::Customer => &self.customers,
            PartyKind::Supplier => &self.suppliers,
        }
    }

    pub fn parties_mut(&mut self, kind: PartyKind) -> &mut Vec<Party> {
        match kind {
            PartyKind::Customer => &mut self.customers,
            PartyKind::Supplier => &mut self.suppliers,
        }
    }

    pub fn find_party(&self, kind: PartyKind, id: u64) -> Option<&Party> {
        self.parties(kind).iter().find(|p| p.id == id)
    }

    pub fn find_party_mut(&mut self, kind: PartyKind, id: u64) -> Option<&mut Party> {
        self.parties_mut(kind).iter_mut().find(|p| p.id == id)
    }

    /// Ids are one past the largest id in use, starting at 1
    pub fn next_party_id(&self, kind: PartyKind) -> u64 {
        self.parties(kind).iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn next_transaction_id(&self) -> u64 {
        self.transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Transactions recorded against one party, oldest first
    pub fn transactions_for(&self, kind: PartyKind, id: u64) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.person_id == id && t.transaction_type == kind.transaction_type())
            .cloned()
            .collect()
    }

    pub fn category_names(&self, kind: PartyKind) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.clone())
            .collect()
    }
}
