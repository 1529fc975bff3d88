//! Session and role models.
//!
//! A session is created at login time and carries an explicit role; all
//! permission checks go through the role, never through view state.

use serde::{Deserialize, Serialize};

/// The role held by the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May submit, cancel and clear their own requests.
    Employee,
    /// May approve or reject any applied request.
    Manager,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

/// The identity of the currently logged-in user.
///
/// Persisted under the `"user"` key as `{"role": ..., "name": ...}`.
///
/// # Example
///
/// ```
/// use leave_engine::models::{Role, Session};
///
/// let session = Session::new(Role::Employee, "Kavya M");
/// assert!(!session.is_manager());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The role selected at login.
    pub role: Role,
    /// The display name of the user.
    pub name: String,
}

impl Session {
    /// Creates a session for the given role and name.
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }

    /// Returns true if this session holds the manager role.
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}
