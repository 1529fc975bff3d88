//! Persistence for the leave engine.
//!
//! Ledger state and the current session identity are written through to a
//! small key-to-JSON-document store on every mutation.

mod json_store;

pub use json_store::JsonStore;
