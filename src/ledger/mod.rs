//! Leave ledger and operation surface.
//!
//! [`LeaveLedger`] holds the leave records for all employees and enforces
//! the per-record status state machine. [`LeaveStore`] wraps the ledger
//! with the current session, the reference data and write-through
//! persistence, and exposes the operations the view layer calls.

mod ledger;
mod store;

pub use ledger::LeaveLedger;
pub use store::{ApplyOutcome, LeaveStore};
