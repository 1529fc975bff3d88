//! Calculation logic for the leave engine.
//!
//! This module contains the pure functions behind request handling:
//! calendar day classification for display, date-range expansion and
//! chargeable-day counting, and the admissibility validation that gates
//! every new leave request.

mod day_class;
mod duration;
mod validation;

pub use day_class::{DayClass, classify, is_weekend};
pub use duration::{chargeable_days, expand_range, holiday_days, weekend_days};
pub use validation::{DEFAULT_ANNUAL_CAP, ValidatedRequest, validate};
