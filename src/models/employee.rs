//! Employee roster entry.

use serde::{Deserialize, Serialize};

/// An entry in the static employee roster.
///
/// The roster is reference data consumed by the engine; it is loaded from
/// configuration and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name, also the identifier used on leave records.
    pub name: String,
    /// The team the employee belongs to.
    pub team: String,
}
