//! Configuration loading for the leave engine.
//!
//! This module provides functionality to load the engine's reference data
//! from YAML files: the employee roster, the public holiday calendar and
//! the leave policy.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave").unwrap();
//! println!("Annual cap: {} days", config.annual_cap());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidaySchedule, LeavePolicy, Roster};
