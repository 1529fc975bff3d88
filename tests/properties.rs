//! Property tests for the pure calculation functions.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use leave_engine::calculation::{chargeable_days, classify, expand_range, is_weekend};
use leave_engine::models::HolidayCalendar;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Any day of 2025
    (1u32..=365).prop_map(|ordinal| {
        NaiveDate::from_yo_opt(2025, ordinal).expect("valid 2025 ordinal date")
    })
}

fn arb_calendar() -> impl Strategy<Value = HolidayCalendar> {
    prop::collection::vec(arb_date(), 0..8).prop_map(|dates| dates.into_iter().collect())
}

proptest! {
    #[test]
    fn expanded_range_is_inclusive_ascending(a in arb_date(), b in arb_date()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let days = expand_range(start, end).unwrap();

        prop_assert_eq!(days.first(), Some(&start));
        prop_assert_eq!(days.last(), Some(&end));
        prop_assert_eq!(days.len() as i64, (end - start).num_days() + 1);
        for pair in days.windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn inverted_range_always_fails(a in arb_date(), b in arb_date()) {
        prop_assume!(a != b);
        let (start, end) = if a > b { (a, b) } else { (b, a) };
        prop_assert!(expand_range(start, end).is_err());
    }

    #[test]
    fn chargeable_days_never_exceeds_range_length(
        a in arb_date(),
        b in arb_date(),
        calendar in arb_calendar(),
    ) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let days = expand_range(start, end).unwrap();
        let charged = chargeable_days(&days, &calendar);
        prop_assert!(charged as usize <= days.len());
    }

    #[test]
    fn single_weekday_non_holiday_charges_exactly_one(
        d in arb_date(),
        calendar in arb_calendar(),
    ) {
        let days = expand_range(d, d).unwrap();
        let expected = if !is_weekend(d) && !calendar.is_holiday(d) { 1 } else { 0 };
        prop_assert_eq!(chargeable_days(&days, &calendar), expected);
    }

    #[test]
    fn adding_holidays_never_increases_charge(
        a in arb_date(),
        b in arb_date(),
        extra in arb_date(),
        calendar in arb_calendar(),
    ) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let days = expand_range(start, end).unwrap();
        let before = chargeable_days(&days, &calendar);

        let grown: HolidayCalendar =
            calendar.iter().chain(std::iter::once(extra)).collect();
        let after = chargeable_days(&days, &grown);
        prop_assert!(after <= before);
    }

    #[test]
    fn classify_is_deterministic(
        d in arb_date(),
        applied in prop::collection::btree_set(arb_date(), 0..8),
        calendar in arb_calendar(),
    ) {
        let applied: BTreeSet<NaiveDate> = applied;
        prop_assert_eq!(
            classify(d, &applied, &calendar),
            classify(d, &applied, &calendar)
        );
    }
}
