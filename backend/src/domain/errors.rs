use shared::PartyKind;

/// Failures of ledger operations.
///
/// Everything except `Storage` is a rejection of the request itself and is
/// reported to the client as `success: false`.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("{kind} {id} not found")]
    PartyNotFound { kind: PartyKind, id: u64 },

    #[error("Amount must be a positive number no larger than 1000000000000")]
    InvalidAmount,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown transaction type '{0}'")]
    UnknownTransactionType(String),

    #[error("Unknown report type '{0}'")]
    UnknownReportType(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl LedgerError {
    /// True when the request was refused rather than the server failing
    pub fn is_rejection(&self) -> bool {
        !matches!(self, LedgerError::Storage(_))
    }
}
