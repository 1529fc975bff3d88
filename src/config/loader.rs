//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! reference data from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{LeaveError, LeaveResult};
use crate::models::{Employee, HolidayCalendar, PublicHoliday};

use super::types::{HolidaySchedule, LeavePolicy, Roster};

/// Loads and provides access to the engine's reference data.
///
/// The `ConfigLoader` reads YAML files from a directory and exposes the
/// employee roster, the public holiday calendar and the leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/leave/
/// ├── employees.yaml   # Employee roster (name + team)
/// ├── holidays.yaml    # Public holidays for the year
/// └── policy.yaml      # Annual cap and other policy values
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/leave").unwrap();
/// for employee in config.roster() {
///     println!("{} ({})", employee.name, employee.team);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    roster: Roster,
    schedule: HolidaySchedule,
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/leave")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> LeaveResult<Self> {
        let path = path.as_ref();

        let roster = Self::load_yaml::<Roster>(&path.join("employees.yaml"))?;
        let schedule = Self::load_yaml::<HolidaySchedule>(&path.join("holidays.yaml"))?;
        let policy = Self::load_yaml::<LeavePolicy>(&path.join("policy.yaml"))?;

        Ok(Self {
            roster,
            schedule,
            policy,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LeaveResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LeaveError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LeaveError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the employee roster.
    pub fn roster(&self) -> &[Employee] {
        &self.roster.employees
    }

    /// Returns the configured public holidays with their names.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.schedule.holidays
    }

    /// Builds the holiday calendar used by classification and validation.
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::from_holidays(&self.schedule.holidays)
    }

    /// Returns the annual cap on chargeable days.
    pub fn annual_cap(&self) -> u32 {
        self.policy.annual_cap
    }
}
