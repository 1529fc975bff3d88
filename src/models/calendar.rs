//! Public holiday models.
//!
//! This module contains the [`PublicHoliday`] type and the
//! [`HolidayCalendar`] date set used by classification, duration and
//! validation logic.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named public holiday.
///
/// # Example
///
/// ```
/// use leave_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///     name: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
}

/// The fixed set of public holiday dates for the year.
///
/// Known in advance and not user-editable; days in this set are never
/// chargeable against the annual cap.
///
/// # Example
///
/// ```
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let aug_15 = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let calendar: HolidayCalendar = [aug_15].into_iter().collect();
/// assert!(calendar.is_holiday(aug_15));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of named holidays.
    pub fn from_holidays(holidays: &[PublicHoliday]) -> Self {
        holidays.iter().map(|h| h.date).collect()
    }

    /// Returns true if the given date is a public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Iterates over the holiday dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Returns the number of holiday dates in the calendar.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the calendar holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn calendar_2025() -> HolidayCalendar {
        HolidayCalendar::from_holidays(&[
            PublicHoliday {
                date: date("2025-01-01"),
                name: "New Year's Day".to_string(),
            },
            PublicHoliday {
                date: date("2025-08-15"),
                name: "Independence Day".to_string(),
            },
            PublicHoliday {
                date: date("2025-10-02"),
                name: "Gandhi Jayanti".to_string(),
            },
        ])
    }

    #[test]
    fn test_is_holiday_returns_true_for_listed_date() {
        let calendar = calendar_2025();
        assert!(calendar.is_holiday(date("2025-08-15")));
    }

    #[test]
    fn test_is_holiday_returns_false_for_ordinary_date() {
        let calendar = calendar_2025();
        assert!(!calendar.is_holiday(date("2025-08-14")));
    }

    #[test]
    fn test_iter_is_ascending() {
        let calendar = calendar_2025();
        let dates: Vec<NaiveDate> = calendar.iter().collect();
        assert_eq!(
            dates,
            vec![date("2025-01-01"), date("2025-08-15"), date("2025-10-02")]
        );
    }

    #[test]
    fn test_duplicate_dates_collapse() {
        let calendar: HolidayCalendar = [date("2025-01-01"), date("2025-01-01")]
            .into_iter()
            .collect();
        assert_eq!(calendar.len(), 1);
    }

    #[test]
    fn test_empty_calendar() {
        let calendar = HolidayCalendar::default();
        assert!(calendar.is_empty());
        assert!(!calendar.is_holiday(date("2025-01-01")));
    }

    #[test]
    fn test_deserialize_public_holiday() {
        let json = r#"{"date":"2025-10-02","name":"Gandhi Jayanti"}"#;
        let holiday: PublicHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, date("2025-10-02"));
        assert_eq!(holiday.name, "Gandhi Jayanti");
    }
}
