//! # IO Module
//!
//! Adapter between HTTP clients and the domain services. Handlers translate
//! JSON requests into service calls and [`LedgerError`]s into status codes.
//!
//! [`LedgerError`]: crate::domain::LedgerError

pub mod rest;

pub use rest::*;
