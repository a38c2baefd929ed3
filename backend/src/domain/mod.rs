//! # Domain Layer
//!
//! Business rules of the ledger. Services take a [`LedgerStore`] and never
//! know which storage backend sits behind it.
//!
//! [`LedgerStore`]: crate::storage::LedgerStore

pub mod errors;
pub mod party_service;
pub mod report_service;
pub mod stats_service;
pub mod transaction_service;

pub use errors::LedgerError;
pub use party_service::PartyService;
pub use report_service::ReportService;
pub use stats_service::StatsService;
pub use transaction_service::TransactionService;
