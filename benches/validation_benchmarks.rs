//! Performance benchmarks for the leave engine.
//!
//! The validation path runs on every submission attempt (and is cheap
//! enough to re-run on every render), so it should stay comfortably in the
//! microsecond range even for year-long date ranges.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use leave_engine::calculation::{DEFAULT_ANNUAL_CAP, chargeable_days, expand_range, validate};
use leave_engine::models::HolidayCalendar;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn holiday_calendar() -> HolidayCalendar {
    [date("2025-01-01"), date("2025-08-15"), date("2025-10-02")]
        .into_iter()
        .collect()
}

fn bench_expand_and_count(c: &mut Criterion) {
    let calendar = holiday_calendar();
    let mut group = c.benchmark_group("chargeable_days");

    for (label, start, end) in [
        ("one_week", "2025-08-11", "2025-08-17"),
        ("one_month", "2025-08-01", "2025-08-31"),
        ("full_year", "2025-01-01", "2025-12-31"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(start, end), |b, _| {
            b.iter(|| {
                let days = expand_range(black_box(date(start)), black_box(date(end))).unwrap();
                chargeable_days(&days, &calendar)
            })
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let calendar = holiday_calendar();
    let today = date("2025-08-01");

    c.bench_function("validate_one_week", |b| {
        b.iter(|| {
            validate(
                black_box(Some(date("2025-08-11"))),
                black_box(Some(date("2025-08-15"))),
                black_box(5),
                &calendar,
                today,
                DEFAULT_ANNUAL_CAP,
            )
        })
    });
}

criterion_group!(benches, bench_expand_and_count, bench_validate);
criterion_main!(benches);
