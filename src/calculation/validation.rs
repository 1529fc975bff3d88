//! Request admissibility validation.
//!
//! Every new leave request passes through [`validate`] before it may be
//! appended to the ledger. The checks run in a fixed order and short-circuit
//! on the first failure; the weekend and holiday notices on the successful
//! result are informational and never block submission.

use chrono::NaiveDate;

use crate::error::{LeaveError, LeaveResult};
use crate::models::HolidayCalendar;

use super::duration::{chargeable_days, expand_range, holiday_days, weekend_days};

/// The default annual cap on chargeable leave days per employee.
pub const DEFAULT_ANNUAL_CAP: u32 = 15;

/// The outcome of a successful validation.
///
/// Carries everything the ledger needs to create the record plus the
/// non-blocking notices surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Every calendar day in the requested range, ascending.
    pub dates: Vec<NaiveDate>,
    /// Chargeable days in the range; becomes the record's `duration`.
    pub duration: u32,
    /// Selected days falling on a weekend (informational).
    pub weekend_days: Vec<NaiveDate>,
    /// Selected days falling on a public holiday (informational).
    pub holiday_days: Vec<NaiveDate>,
}

/// Validates a candidate leave request.
///
/// Checks, in order, each short-circuiting on first failure:
///
/// 1. both dates present, else [`LeaveError::MissingDates`];
/// 2. `start <= end`, else [`LeaveError::InvertedRange`];
/// 3. neither date strictly before `today`, else [`LeaveError::PastDate`];
/// 4. `existing_total + duration <= annual_cap`, else
///    [`LeaveError::AnnualCapExceeded`]. The boundary is inclusive: a
///    request that lands exactly on the cap is accepted.
///
/// `existing_total` is the sum of `duration` over the employee's current
/// records, whatever their status. `today` is a calendar date; time of day
/// plays no part in the comparison. A request whose chargeable duration is
/// zero passes the cap check and is accepted.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{validate, DEFAULT_ANNUAL_CAP};
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar: HolidayCalendar =
///     [NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()].into_iter().collect();
/// let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
///
/// let validated = validate(
///     NaiveDate::from_ymd_opt(2025, 8, 11),
///     NaiveDate::from_ymd_opt(2025, 8, 15),
///     0,
///     &calendar,
///     today,
///     DEFAULT_ANNUAL_CAP,
/// ).unwrap();
/// assert_eq!(validated.duration, 4); // Friday the 15th is a holiday
/// ```
pub fn validate(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    existing_total: u32,
    calendar: &HolidayCalendar,
    today: NaiveDate,
    annual_cap: u32,
) -> LeaveResult<ValidatedRequest> {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(LeaveError::MissingDates),
    };

    if start > end {
        return Err(LeaveError::InvertedRange { start, end });
    }

    for date in [start, end] {
        if date < today {
            return Err(LeaveError::PastDate { date, today });
        }
    }

    let dates = expand_range(start, end)?;
    let duration = chargeable_days(&dates, calendar);

    if existing_total + duration > annual_cap {
        return Err(LeaveError::AnnualCapExceeded {
            requested: duration,
            existing: existing_total,
            cap: annual_cap,
        });
    }

    let weekend_days = weekend_days(&dates);
    let holiday_days = holiday_days(&dates, calendar);

    Ok(ValidatedRequest {
        dates,
        duration,
        weekend_days,
        holiday_days,
    })
}
