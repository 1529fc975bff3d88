//! Calendar day classification.
//!
//! This module provides utilities for classifying a calendar day for
//! display: already covered by one of the employee's requests, a public
//! holiday, a weekend, or an ordinary working day.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidayCalendar;

/// The display classification of a single calendar day.
///
/// Classification drives highlighting only; it never decides whether a
/// request is admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Covered by one of the employee's existing requests.
    Applied,
    /// A public holiday.
    PublicHoliday,
    /// Saturday or Sunday.
    Weekend,
    /// A plain working day.
    Ordinary,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Applied => write!(f, "Applied"),
            DayClass::PublicHoliday => write!(f, "PublicHoliday"),
            DayClass::Weekend => write!(f, "Weekend"),
            DayClass::Ordinary => write!(f, "Ordinary"),
        }
    }
}

/// Returns true if the date falls on a Saturday or Sunday.
///
/// Dates are compared by calendar date only (proleptic Gregorian, no
/// timezone conversion).
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2025-08-16 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()));
/// // 2025-08-11 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 8, 11).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies a date against the employee's applied dates and the public
/// holiday calendar.
///
/// When several classifications could apply, the first match wins:
/// [`DayClass::Applied`] over [`DayClass::PublicHoliday`] over
/// [`DayClass::Weekend`] over [`DayClass::Ordinary`]. Pure function with
/// no side effects.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{classify, DayClass};
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
/// use std::collections::BTreeSet;
///
/// let aug_15 = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let calendar: HolidayCalendar = [aug_15].into_iter().collect();
/// let mut applied = BTreeSet::new();
///
/// assert_eq!(classify(aug_15, &applied, &calendar), DayClass::PublicHoliday);
///
/// // An applied date wins over the holiday classification.
/// applied.insert(aug_15);
/// assert_eq!(classify(aug_15, &applied, &calendar), DayClass::Applied);
/// ```
pub fn classify(
    date: NaiveDate,
    applied: &BTreeSet<NaiveDate>,
    calendar: &HolidayCalendar,
) -> DayClass {
    if applied.contains(&date) {
        DayClass::Applied
    } else if calendar.is_holiday(date) {
        DayClass::PublicHoliday
    } else if is_weekend(date) {
        DayClass::Weekend
    } else {
        DayClass::Ordinary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn holiday_calendar() -> HolidayCalendar {
        [date("2025-01-01"), date("2025-08-15"), date("2025-10-02")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_saturday_is_weekend() {
        // 2025-08-16 is a Saturday
        assert!(is_weekend(date("2025-08-16")));
    }

    #[test]
    fn test_sunday_is_weekend() {
        // 2025-08-17 is a Sunday
        assert!(is_weekend(date("2025-08-17")));
    }

    #[test]
    fn test_weekdays_are_not_weekend() {
        // 2025-08-11 through 2025-08-15 are Monday through Friday
        for day in 11..=15 {
            assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 8, day).unwrap()));
        }
    }

    #[test]
    fn test_ordinary_weekday_classifies_ordinary() {
        let applied = BTreeSet::new();
        assert_eq!(
            classify(date("2025-08-12"), &applied, &holiday_calendar()),
            DayClass::Ordinary
        );
    }

    #[test]
    fn test_holiday_classifies_public_holiday() {
        let applied = BTreeSet::new();
        assert_eq!(
            classify(date("2025-08-15"), &applied, &holiday_calendar()),
            DayClass::PublicHoliday
        );
    }

    #[test]
    fn test_weekend_classifies_weekend() {
        let applied = BTreeSet::new();
        assert_eq!(
            classify(date("2025-08-16"), &applied, &holiday_calendar()),
            DayClass::Weekend
        );
    }

    #[test]
    fn test_applied_wins_over_holiday() {
        let applied: BTreeSet<NaiveDate> = [date("2025-08-15")].into_iter().collect();
        assert_eq!(
            classify(date("2025-08-15"), &applied, &holiday_calendar()),
            DayClass::Applied
        );
    }

    #[test]
    fn test_applied_wins_over_weekend() {
        let applied: BTreeSet<NaiveDate> = [date("2025-08-16")].into_iter().collect();
        assert_eq!(
            classify(date("2025-08-16"), &applied, &holiday_calendar()),
            DayClass::Applied
        );
    }

    #[test]
    fn test_holiday_wins_over_weekend() {
        // 2026-08-15 is a Saturday; list it as a holiday as well
        let calendar: HolidayCalendar = [date("2026-08-15")].into_iter().collect();
        let applied = BTreeSet::new();
        assert_eq!(
            classify(date("2026-08-15"), &applied, &calendar),
            DayClass::PublicHoliday
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let applied: BTreeSet<NaiveDate> = [date("2025-08-13")].into_iter().collect();
        let calendar = holiday_calendar();
        let first = classify(date("2025-08-13"), &applied, &calendar);
        let second = classify(date("2025-08-13"), &applied, &calendar);
        assert_eq!(first, second);
    }

    #[test]
    fn test_day_class_display() {
        assert_eq!(format!("{}", DayClass::Applied), "Applied");
        assert_eq!(format!("{}", DayClass::PublicHoliday), "PublicHoliday");
        assert_eq!(format!("{}", DayClass::Weekend), "Weekend");
        assert_eq!(format!("{}", DayClass::Ordinary), "Ordinary");
    }

    #[test]
    fn test_day_class_serialization() {
        let json = serde_json::to_string(&DayClass::PublicHoliday).unwrap();
        assert_eq!(json, "\"public_holiday\"");
        let deserialized: DayClass = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayClass::PublicHoliday);
    }
}
