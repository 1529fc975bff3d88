//! Leave record model and related enums.
//!
//! This module defines the [`LeaveRecord`] struct together with the
//! [`LeaveType`], [`LeaveStatus`] and [`Decision`] enums. Records are
//! serialized with the field names used by the persisted JSON documents
//! (`name`, `start`, `end`, `leaveType`, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    /// Casual leave (the default selection).
    Casual,
    /// Sick leave.
    Sick,
    /// Earned leave.
    Earned,
}

impl Default for LeaveType {
    fn default() -> Self {
        LeaveType::Casual
    }
}

/// The lifecycle status of a leave record.
///
/// A record is created as `Applied`, and a manager moves it to exactly one
/// of the terminal statuses. Terminal records only leave the ledger through
/// an explicit bulk clear by the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Submitted and awaiting a manager decision.
    Applied,
    /// Approved by a manager (terminal).
    Approved,
    /// Rejected by a manager (terminal, clearable by the employee).
    Rejected,
}

impl LeaveStatus {
    /// Returns true if no further manager action is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Applied => write!(f, "applied"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A manager's decision on an applied record.
///
/// Modelled separately from [`LeaveStatus`] so that `applied` can never be
/// the target of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Approve the request.
    Approved,
    /// Reject the request.
    Rejected,
}

impl From<Decision> for LeaveStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approved => LeaveStatus::Approved,
            Decision::Rejected => LeaveStatus::Rejected,
        }
    }
}

/// A single leave request held by the ledger.
///
/// `duration` is the number of chargeable days in the inclusive range
/// `[start_date, end_date]`, computed once when the record is accepted and
/// never recomputed, even if the holiday calendar later changes.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveRecord, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let record = LeaveRecord {
///     employee_name: "Kavya M".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///     leave_type: LeaveType::Casual,
///     remarks: None,
///     status: LeaveStatus::Applied,
///     duration: 4,
/// };
/// assert_eq!(record.status, LeaveStatus::Applied);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Name of the requesting employee.
    #[serde(rename = "name")]
    pub employee_name: String,
    /// First day of the requested range (inclusive).
    #[serde(rename = "start")]
    pub start_date: NaiveDate,
    /// Last day of the requested range (inclusive).
    #[serde(rename = "end")]
    pub end_date: NaiveDate,
    /// The category of leave.
    #[serde(rename = "leaveType")]
    pub leave_type: LeaveType,
    /// Optional free-text remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Current lifecycle status.
    pub status: LeaveStatus,
    /// Chargeable days consumed by this record. Immutable after creation.
    pub duration: u32,
}
