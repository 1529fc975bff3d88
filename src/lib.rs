//! Leave Request Validation & Accrual Engine
//!
//! This crate provides the core logic of a small leave-request tool:
//! employees submit date-range leave requests, managers approve or reject
//! them, and the ledger is persisted as JSON documents. The engine enforces
//! the request-admissibility rules (date ordering, no past dates, the annual
//! chargeable-day cap) and the per-record status state machine.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod storage;
