use chrono::Utc;
use tracing::{info, warn};

use super::errors::LedgerError;
use crate::storage::LedgerStore;
use shared::{Party, PartyDraft, PartyKind, Transaction};

/// Service for managing customers and suppliers
#[derive(Clone)]
pub struct PartyService {
    store: LedgerStore,
}

impl PartyService {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Create a new party with a zero balance
    pub async fn add(&self, kind: PartyKind, draft: PartyDraft) -> Result<Party, LedgerError> {
        info!("Adding {}: name={}", kind, draft.name);
        let draft = Self::normalize(draft)?;

        let party = self
            .store
            .modify(move |ledger| -> Result<Party, LedgerError> {
                let party = Party {
                    id: ledger.next_party_id(kind),
                    name: draft.name,
                    phone: draft.phone,
                    category: draft.category,
                    notes: draft.notes,
                    balance: 0.0,
                    created_at: Utc::now().to_rfc3339(),
                    transactions: Vec::new(),
                };
                ledger.parties_mut(kind).push(party.clone());
                Ok(party)
            })
            .await?;

        info!("Added {} {} with id {}", kind, party.name, party.id);
        Ok(party)
    }

    /// Replace the editable fields of a party; balance and history are kept
    pub async fn update(&self, kind: PartyKind, id: u64, draft: PartyDraft) -> Result<Party, LedgerError> {
        info!("Updating {} {}", kind, id);
        let draft = Self::normalize(draft)?;

        self.store
            .modify(move |ledger| -> Result<Party, LedgerError> {
                let party = ledger
                    .find_party_mut(kind, id)
                    .ok_or(LedgerError::PartyNotFound { kind, id })?;
                party.name = draft.name;
                party.phone = draft.phone;
                party.category = draft.category;
                party.notes = draft.notes;
                Ok(party.clone())
            })
            .await
    }

    /// Delete a party and every transaction recorded against it.
    ///
    /// Returns whether the party existed; deleting an unknown id is not an error.
    pub async fn delete(&self, kind: PartyKind, id: u64) -> Result<bool, LedgerError> {
        info!("Deleting {} {}", kind, id);

        let existed = self
            .store
            .modify(move |ledger| -> Result<bool, LedgerError> {
                let parties = ledger.parties_mut(kind);
                let before = parties.len();
                parties.retain(|p| p.id != id);
                let existed = parties.len() != before;

                let transaction_type = kind.transaction_type();
                ledger
                    .transactions
                    .retain(|t| !(t.person_id == id && t.transaction_type == transaction_type));
                Ok(existed)
            })
            .await?;

        if !existed {
            warn!("Delete requested for unknown {} {}", kind, id);
        }
        Ok(existed)
    }

    /// A party together with its transactions, oldest first
    pub async fn get(&self, kind: PartyKind, id: u64) -> Result<(Party, Vec<Transaction>), LedgerError> {
        let ledger = self.store.read().await?;
        let party = ledger
            .find_party(kind, id)
            .cloned()
            .ok_or(LedgerError::PartyNotFound { kind, id })?;
        let transactions = ledger.transactions_for(kind, id);
        Ok((party, transactions))
    }

    /// All parties of a kind plus the category names offered for them
    pub async fn list(&self, kind: PartyKind) -> Result<(Vec<Party>, Vec<String>), LedgerError> {
        let ledger = self.store.read().await?;
        let parties = ledger.parties(kind).to_vec();
        info!("Found {} {}", parties.len(), kind.plural());
        Ok((parties, ledger.category_names(kind)))
    }

    fn normalize(draft: PartyDraft) -> Result<PartyDraft, LedgerError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }

        Ok(PartyDraft {
            name,
            phone: draft.phone.trim().to_string(),
            category: draft.category.trim().to_string(),
            notes: draft.notes.trim().to_string(),
        })
    }
}
