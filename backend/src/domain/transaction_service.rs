use chrono::{NaiveDate, Utc};
use tracing::info;

use super::errors::LedgerError;
use crate::storage::LedgerStore;
use shared::{DebtDraft, PartyKind, Transaction};

/// Largest amount a single transaction may carry
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;
/// Largest balance magnitude a party may reach
pub const MAX_BALANCE: f64 = 1_000_000_000_000_000.0;

/// Records debt transactions and keeps party balances in step with them
#[derive(Clone)]
pub struct TransactionService {
    store: LedgerStore,
}

impl TransactionService {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Record a debt transaction and apply it to the party balance.
    ///
    /// `taken` raises the balance, anything else lowers it. The transaction,
    /// the party's transaction list and its balance are saved together.
    pub async fn add(&self, draft: DebtDraft) -> Result<Transaction, LedgerError> {
        info!(
            "Adding {} transaction: person_id={}, debt_type={}, amount={}",
            draft.transaction_type,
            draft.person_id,
            draft.debt_type.as_str(),
            draft.amount
        );

        let kind = PartyKind::from_transaction_type(&draft.transaction_type)
            .ok_or_else(|| LedgerError::UnknownTransactionType(draft.transaction_type.clone()))?;
        Self::validate(&draft)?;

        let transaction = self
            .store
            .modify(move |ledger| -> Result<Transaction, LedgerError> {
                let id = ledger.next_transaction_id();
                let party = ledger
                    .find_party_mut(kind, draft.person_id)
                    .ok_or(LedgerError::PartyNotFound { kind, id: draft.person_id })?;

                // A non-finite balance would be written as null and break every later load
                let balance = round_cents(party.balance + draft.debt_type.signed_amount(draft.amount));
                if !balance.is_finite() || balance.abs() > MAX_BALANCE {
                    return Err(LedgerError::InvalidAmount);
                }
                party.balance = balance;
                party.transactions.push(id);

                let transaction = Transaction {
                    id,
                    transaction_type: draft.transaction_type,
                    person_id: draft.person_id,
                    debt_type: draft.debt_type,
                    amount: draft.amount,
                    date: draft.date,
                    notes: draft.notes.trim().to_string(),
                    created_at: Utc::now().to_rfc3339(),
                };
                ledger.transactions.push(transaction.clone());
                Ok(transaction)
            })
            .await?;

        info!("Recorded transaction {} for {} {}", transaction.id, kind, transaction.person_id);
        Ok(transaction)
    }

    fn validate(draft: &DebtDraft) -> Result<(), LedgerError> {
        if !draft.amount.is_finite() || draft.amount <= 0.0 || draft.amount > MAX_AMOUNT {
            return Err(LedgerError::InvalidAmount);
        }

        NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d")
            .map_err(|_| LedgerError::InvalidDate(draft.date.clone()))?;

        Ok(())
    }
}

fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if !cents.is_finite() {
        return value;
    }
    cents.round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PartyService;
    use crate::storage::test_utils::{memory_store, TestEnvironment};
    use shared::{DebtType, PartyDraft};

    async fn setup_with_customer() -> (TransactionService, PartyService, u64) {
        let store = memory_store();
        let parties = PartyService::new(store.clone());
        let customer = parties
            .add(
                PartyKind::Customer,
                PartyDraft { name: "Ali".to_string(), ..Default::default() },
            )
            .await
            .expect("Failed to add customer");
        (TransactionService::new(store), parties, customer.id)
    }

    fn debt(person_id: u64, debt_type: DebtType, amount: f64) -> DebtDraft {
        DebtDraft {
            transaction_type: "customer_debt".to_string(),
            person_id,
            debt_type,
            amount,
            date: "2025-03-14".to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_taken_and_paid_move_the_balance() {
        let (service, parties, id) = setup_with_customer().await;

        let first = service.add(debt(id, DebtType::Taken, 100.0)).await.unwrap();
        let second = service.add(debt(id, DebtType::Paid, 30.5)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let (party, history) = parties.get(PartyKind::Customer, id).await.unwrap();
        assert_eq!(party.balance, 69.5);
        assert_eq!(party.transactions, vec![1, 2]);
        assert_eq!(history.len(), 2);
    }

    #[tokio::test]
    async fn test_balance_does_not_drift() {
        let (service, parties, id) = setup_with_customer().await;

        for _ in 0..3 {
            service.add(debt(id, DebtType::Taken, 0.1)).await.unwrap();
        }
        service.add(debt(id, DebtType::Paid, 0.3)).await.unwrap();

        let (party, _) = parties.get(PartyKind::Customer, id).await.unwrap();
        assert_eq!(party.balance, 0.0);
    }

    #[tokio::test]
    async fn test_rejects_invalid_drafts() {
        let (service, parties, id) = setup_with_customer().await;

        let zero = service.add(debt(id, DebtType::Taken, 0.0)).await;
        assert!(matches!(zero, Err(LedgerError::InvalidAmount)));

        let nan = service.add(debt(id, DebtType::Taken, f64::NAN)).await;
        assert!(matches!(nan, Err(LedgerError::InvalidAmount)));

        let mut bad_date = debt(id, DebtType::Taken, 5.0);
        bad_date.date = "14/03/2025".to_string();
        assert!(matches!(service.add(bad_date).await, Err(LedgerError::InvalidDate(_))));

        let mut bad_type = debt(id, DebtType::Taken, 5.0);
        bad_type.transaction_type = "cash".to_string();
        assert!(matches!(
            service.add(bad_type).await,
            Err(LedgerError::UnknownTransactionType(_))
        ));

        let (party, history) = parties.get(PartyKind::Customer, id).await.unwrap();
        assert_eq!(party.balance, 0.0);
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_party_leaves_ledger_untouched() {
        let (service, _, _) = setup_with_customer().await;

        let result = service.add(debt(404, DebtType::Taken, 5.0)).await;
        assert!(matches!(
            result,
            Err(LedgerError::PartyNotFound { kind: PartyKind::Customer, id: 404 })
        ));

        let ledger = service.store.read().await.unwrap();
        assert!(ledger.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_supplier_debt_targets_suppliers() {
        let store = memory_store();
        let parties = PartyService::new(store.clone());
        let service = TransactionService::new(store);

        let supplier = parties
            .add(PartyKind::Supplier, PartyDraft { name: "Mill".to_string(), ..Default::default() })
            .await
            .unwrap();

        let mut draft = debt(supplier.id, DebtType::Taken, 250.0);
        draft.transaction_type = "supplier_debt".to_string();
        service.add(draft).await.unwrap();

        let (party, _) = parties.get(PartyKind::Supplier, supplier.id).await.unwrap();
        assert_eq!(party.balance, 250.0);
        // No customer with that id exists
        assert!(parties.get(PartyKind::Customer, supplier.id).await.is_err());
    }

    #[tokio::test]
    async fn test_huge_amount_keeps_ledger_readable() {
        let env = TestEnvironment::new().unwrap();
        let store = env.json_store().unwrap();
        let parties = PartyService::new(store.clone());
        let service = TransactionService::new(store.clone());
        let ali = parties
            .add(PartyKind::Customer, PartyDraft { name: "Ali".to_string(), ..Default::default() })
            .await
            .unwrap();

        let result = service.add(debt(ali.id, DebtType::Taken, 1e307)).await;
        assert!(matches!(result, Err(LedgerError::InvalidAmount)));
        let result = service.add(debt(ali.id, DebtType::Taken, MAX_AMOUNT * 2.0)).await;
        assert!(matches!(result, Err(LedgerError::InvalidAmount)));

        // The file still loads and accepts further writes
        let (listed, _) = parties.list(PartyKind::Customer).await.unwrap();
        assert_eq!(listed[0].balance, 0.0);
        parties
            .add(PartyKind::Customer, PartyDraft { name: "Sara".to_string(), ..Default::default() })
            .await
            .unwrap();
        service.add(debt(ali.id, DebtType::Taken, MAX_AMOUNT)).await.unwrap();

        let (ali, _) = parties.get(PartyKind::Customer, ali.id).await.unwrap();
        assert_eq!(ali.balance, MAX_AMOUNT);
    }

    #[tokio::test]
    async fn test_balance_cap_rejects_without_saving() {
        let env = TestEnvironment::new().unwrap();
        let store = env.json_store().unwrap();
        let parties = PartyService::new(store.clone());
        let service = TransactionService::new(store.clone());
        let ali = parties
            .add(PartyKind::Customer, PartyDraft { name: "Ali".to_string(), ..Default::default() })
            .await
            .unwrap();

        store
            .modify(|ledger| -> Result<(), LedgerError> {
                if let Some(party) = ledger.find_party_mut(PartyKind::Customer, ali.id) {
                    party.balance = MAX_BALANCE;
                }
                Ok(())
            })
            .await
            .unwrap();

        let result = service.add(debt(ali.id, DebtType::Taken, 1.0)).await;
        assert!(matches!(result, Err(LedgerError::InvalidAmount)));

        let ledger = store.read().await.unwrap();
        assert!(ledger.transactions.is_empty());
        assert_eq!(ledger.customers[0].balance, MAX_BALANCE);
        assert!(ledger.customers[0].transactions.is_empty());
    }

    #[test]
    fn test_round_cents_never_overflows() {
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_cents(1e307), 1e307);
        assert!(round_cents(f64::MAX).is_finite());
    }
}
