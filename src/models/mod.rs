//! Core data models for the leave engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod employee;
mod record;
mod session;

pub use calendar::{HolidayCalendar, PublicHoliday};
pub use employee::Employee;
pub use record::{Decision, LeaveRecord, LeaveStatus, LeaveType};
pub use session::{Role, Session};
