//! Date-range expansion and chargeable-day counting.
//!
//! A leave request covers an inclusive range of calendar days, but only the
//! days that are neither weekends nor public holidays are charged against
//! the annual cap.

use chrono::NaiveDate;

use crate::error::{LeaveError, LeaveResult};
use crate::models::HolidayCalendar;

use super::day_class::is_weekend;

/// Expands an inclusive date range into its individual calendar days.
///
/// The result is ascending with one entry per day. Fails with
/// [`LeaveError::InvertedRange`] when `start > end`; a single-day range
/// (`start == end`) yields one entry.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::expand_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
/// let days = expand_range(start, end).unwrap();
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[0], start);
/// assert_eq!(days[2], end);
/// ```
pub fn expand_range(start: NaiveDate, end: NaiveDate) -> LeaveResult<Vec<NaiveDate>> {
    if start > end {
        return Err(LeaveError::InvertedRange { start, end });
    }
    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

/// Counts the days in the sequence that are chargeable against the annual
/// cap: neither a weekend nor a public holiday.
///
/// Zero is a legal result (e.g. a single-day request on a holiday).
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{chargeable_days, expand_range};
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// // Mon 2025-08-11 through Fri 2025-08-15, where the Friday is a holiday.
/// let days = expand_range(
///     NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
/// ).unwrap();
/// let calendar: HolidayCalendar =
///     [NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()].into_iter().collect();
/// assert_eq!(chargeable_days(&days, &calendar), 4);
/// ```
pub fn chargeable_days(dates: &[NaiveDate], calendar: &HolidayCalendar) -> u32 {
    dates
        .iter()
        .filter(|d| !is_weekend(**d) && !calendar.is_holiday(**d))
        .count() as u32
}

/// Returns the subset of the sequence that falls on a weekend.
///
/// Used for the informational notice shown on submission; weekend days do
/// not block a request.
pub fn weekend_days(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    dates.iter().copied().filter(|d| is_weekend(*d)).collect()
}

/// Returns the subset of the sequence that falls on a public holiday.
///
/// Like [`weekend_days`], this feeds a non-blocking notice.
pub fn holiday_days(dates: &[NaiveDate], calendar: &HolidayCalendar) -> Vec<NaiveDate> {
    dates
        .iter()
        .copied()
        .filter(|d| calendar.is_holiday(*d))
        .collect()
}
