//! Error types for the leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating, recording, or
//! persisting leave requests.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{LeaveStatus, Role};

/// The main error type for the leave engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::LeaveError;
///
/// let error = LeaveError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum LeaveError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A request was submitted without both a start and an end date.
    #[error("Both start and end dates must be selected")]
    MissingDates,

    /// The start date of a range was after the end date.
    #[error("Start date {start} cannot be after end date {end}")]
    InvertedRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A requested date lies strictly before today.
    #[error("Past date {date} not allowed (today is {today})")]
    PastDate {
        /// The offending date.
        date: NaiveDate,
        /// The calendar date at validation time.
        today: NaiveDate,
    },

    /// Accepting the request would push the employee over the annual cap.
    #[error(
        "Request for {requested} day(s) exceeds the annual {cap}-day limit \
         ({existing} day(s) already taken)"
    )]
    AnnualCapExceeded {
        /// Chargeable days in the new request.
        requested: u32,
        /// Chargeable days already held by the employee.
        existing: u32,
        /// The annual cap in force.
        cap: u32,
    },

    /// No leave record exists at the given ledger index.
    #[error("No leave record at index {index}")]
    RecordNotFound {
        /// The out-of-range index.
        index: usize,
    },

    /// A decision or cancellation was attempted on a record that is no
    /// longer in the `applied` status. The ledger is left untouched.
    #[error("Record is already '{status}' and can no longer be changed")]
    InvalidTransition {
        /// The record's current status.
        status: LeaveStatus,
    },

    /// An operation that requires a session was invoked without one.
    #[error("No user is logged in")]
    NotLoggedIn,

    /// The current session's role may not perform the requested operation.
    #[error("Role '{role}' is not permitted to {action}")]
    PermissionDenied {
        /// What was attempted (e.g. "approve requests").
        action: String,
        /// The role held by the current session.
        role: Role,
    },

    /// A persistence read or write failed.
    #[error("Storage error at '{path}': {message}")]
    Storage {
        /// The document path involved.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return LeaveError.
pub type LeaveResult<T> = Result<T, LeaveError>;
