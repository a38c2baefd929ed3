//! Turning modal form state into requests, and responses into notifications

use shared::{DebtDraft, DebtType, PartyKind};

use crate::hooks::use_modals::DebtTarget;
use crate::hooks::use_notifications::NotificationKind;

/// Delay between a successful save and re-fetching the table and stats
pub const REFRESH_DELAY_MS: u32 = 1000;

pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error";

/// How a submission ended, as far as the user is concerned
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// `success: true`; close the modals and refresh
    Saved,
    /// `success: false`; the modal stays open
    Rejected(Option<String>),
    /// Transport or decoding failure
    Failed(String),
}

impl SubmitOutcome {
    /// Classify a response given its `success` flag and `message`
    pub fn from_result(result: Result<(bool, Option<String>), String>) -> Self {
        match result {
            Ok((true, _)) => SubmitOutcome::Saved,
            Ok((false, message)) => SubmitOutcome::Rejected(message),
            Err(error) => SubmitOutcome::Failed(error),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }

    /// Notification text and kind for this outcome
    pub fn notification(&self, messages: &SubmitMessages) -> (String, NotificationKind) {
        match self {
            SubmitOutcome::Saved => (messages.success.clone(), NotificationKind::Success),
            SubmitOutcome::Rejected(_) => (messages.failure.clone(), NotificationKind::Error),
            SubmitOutcome::Failed(_) => (CONNECTION_ERROR_MESSAGE.to_string(), NotificationKind::Error),
        }
    }
}

/// User-facing wording of one kind of submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitMessages {
    pub success: String,
    pub failure: String,
}

impl SubmitMessages {
    pub fn add_party(kind: PartyKind) -> Self {
        Self {
            success: format!("{} added successfully", kind.label()),
            failure: format!("Failed to add {}", kind),
        }
    }

    pub fn update_party(kind: PartyKind) -> Self {
        Self {
            success: format!("{} updated successfully", kind.label()),
            failure: format!("Failed to update {}", kind),
        }
    }

    pub fn delete_party(kind: PartyKind) -> Self {
        Self {
            success: format!("{} deleted successfully", kind.label()),
            failure: format!("Failed to delete {}", kind),
        }
    }

    pub fn add_transaction() -> Self {
        Self {
            success: "Transaction added successfully".to_string(),
            failure: "Failed to add transaction".to_string(),
        }
    }
}

pub fn delete_confirmation(kind: PartyKind) -> String {
    format!("Delete this {}? All of its transactions will be deleted too.", kind)
}

/// Fields of the add-debt form, kept as typed text until submission
#[derive(Debug, Clone, PartialEq)]
pub struct DebtForm {
    pub debt_type: DebtType,
    pub amount: String,
    pub date: String,
    pub notes: String,
}

impl DebtForm {
    /// A blank form dated `today`
    pub fn new(today: String) -> Self {
        Self {
            debt_type: DebtType::Taken,
            amount: String::new(),
            date: today,
            notes: String::new(),
        }
    }
}

/// Build the transaction request for `target`.
///
/// Without a target there is nothing to submit and `Ok(None)` is returned.
/// An amount that does not parse as a number is an error.
pub fn build_debt_draft(target: Option<&DebtTarget>, form: &DebtForm) -> Result<Option<DebtDraft>, String> {
    let Some(target) = target else {
        return Ok(None);
    };

    let amount = form
        .amount
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a valid amount", form.amount.trim()))?;

    Ok(Some(DebtDraft {
        transaction_type: target.kind.transaction_type().to_string(),
        person_id: target.id,
        debt_type: form.debt_type,
        amount,
        date: form.date.clone(),
        notes: form.notes.clone(),
    }))
}
