//! Configuration file schemas.

use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_ANNUAL_CAP;
use crate::models::{Employee, PublicHoliday};

/// Schema of `employees.yaml`: the static employee roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// All employees known to the tool.
    pub employees: Vec<Employee>,
}

/// Schema of `holidays.yaml`: the public holidays for the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySchedule {
    /// The public holidays, with their display names.
    pub holidays: Vec<PublicHoliday>,
}

/// Schema of `policy.yaml`: tunable leave policy values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Maximum chargeable days per employee per year.
    #[serde(default = "default_annual_cap")]
    pub annual_cap: u32,
}

fn default_annual_cap() -> u32 {
    DEFAULT_ANNUAL_CAP
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            annual_cap: DEFAULT_ANNUAL_CAP,
        }
    }
}
