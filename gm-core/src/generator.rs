//! Synthetic daily records standing in for a real measurement feed.
//!
//! Randomness and "today" are both injected so a window can be reproduced
//! exactly in tests; the browser supplies `Math.random()` and the local date.

use crate::date_range::DateRange;
use crate::record::DailyRecord;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Days generated before today.
pub const DAYS_BEFORE: i64 = 10;
/// Days generated after today.
pub const DAYS_AFTER: i64 = 4;
/// Total records in a window.
pub const WINDOW_LEN: usize = (DAYS_BEFORE + DAYS_AFTER + 1) as usize;

pub const PH_RANGE: (f64, f64) = (6.0, 8.5);
pub const DO_RANGE: (f64, f64) = (4.0, 8.0);
pub const BOD_RANGE: (f64, f64) = (1.0, 3.0);
pub const COLIFORM_MAX: u32 = 5000;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Supplies the calendar date treated as "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local date of the host (browser local time under WASM).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The generated records together with the date they were generated for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWindow {
    today: NaiveDate,
    records: Vec<DailyRecord>,
}

impl DailyWindow {
    pub fn generate<R, C>(rng: &mut R, clock: &C) -> DailyWindow
    where
        R: RandomSource + ?Sized,
        C: Clock + ?Sized,
    {
        generate_window(rng, clock.today())
    }

    /// Wrap pre-built records, e.g. fixtures.
    pub fn from_records(today: NaiveDate, records: Vec<DailyRecord>) -> DailyWindow {
        DailyWindow { today, records }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// The record dated today.
    ///
    /// A generated window always contains it; if it is somehow missing the
    /// miss is logged and the first record is used instead.
    pub fn today_record(&self) -> Option<&DailyRecord> {
        match self.records.iter().find(|r| r.date == self.today) {
            Some(record) => Some(record),
            None => {
                log::error!(
                    "[GM] no record dated {} in a window of {}, using first record",
                    self.today,
                    self.records.len()
                );
                self.records.first()
            }
        }
    }
}

/// Build the fifteen-day window `[today - 10, today + 4]`.
pub fn generate_window<R>(rng: &mut R, today: NaiveDate) -> DailyWindow
where
    R: RandomSource + ?Sized,
{
    let records = DateRange::around(today, DAYS_BEFORE, DAYS_AFTER)
        .zip(-DAYS_BEFORE..=DAYS_AFTER)
        .map(|(date, offset)| DailyRecord {
            id: offset as i32 + 1,
            date,
            ph: sample_decimal(rng, PH_RANGE),
            dissolved_oxygen: sample_decimal(rng, DO_RANGE),
            bod: sample_decimal(rng, BOD_RANGE),
            total_coliform: sample_count(rng, COLIFORM_MAX),
        })
        .collect::<Vec<DailyRecord>>();
    log::debug!("[GM] generated {} records around {}", records.len(), today);
    DailyWindow { today, records }
}

fn unit<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    let u = rng.next_unit();
    if u.is_nan() {
        0.0
    } else {
        u.clamp(0.0, 1.0)
    }
}

/// Uniform value in `[lo, hi]` rounded to two decimal places.
fn sample_decimal<R: RandomSource + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    let raw = lo + unit(rng) * (hi - lo);
    ((raw * 100.0).round() / 100.0).clamp(lo, hi)
}

/// Uniform integer in `[0, max]`.
fn sample_count<R: RandomSource + ?Sized>(rng: &mut R, max: u32) -> u32 {
    let raw = (unit(rng) * f64::from(max + 1)).floor() as u32;
    raw.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    /// xorshift64*, enough to sweep the value ranges.
    struct XorShift(u64);

    impl RandomSource for XorShift {
        fn next_unit(&mut self) -> f64 {
            self.0 ^= self.0 >> 12;
            self.0 ^= self.0 << 25;
            self.0 ^= self.0 >> 27;
            let bits = self.0.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
            bits as f64 / (1u64 << 53) as f64
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn window_has_fifteen_consecutive_days() {
        let window = generate_window(&mut XorShift(7), today());
        let records = window.records();
        assert_eq!(records.len(), WINDOW_LEN);
        assert_eq!(records[0].date, today() - TimeDelta::days(10));
        assert_eq!(records[14].date, today() + TimeDelta::days(4));
        for pair in records.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, TimeDelta::days(1));
        }
    }

    #[test]
    fn values_stay_in_range_across_seeds() {
        for seed in 1..200u64 {
            let window = generate_window(&mut XorShift(seed), today());
            for r in window.records() {
                assert!((6.0..=8.5).contains(&r.ph), "ph {}", r.ph);
                assert!((4.0..=8.0).contains(&r.dissolved_oxygen), "do {}", r.dissolved_oxygen);
                assert!((1.0..=3.0).contains(&r.bod), "bod {}", r.bod);
                assert!(r.total_coliform <= 5000);
                assert_eq!((r.ph * 100.0).round() / 100.0, r.ph);
            }
        }
    }

    #[test]
    fn extreme_samples_are_clamped() {
        let mut ones = || 1.0;
        let window = generate_window(&mut ones, today());
        let r = &window.records()[0];
        assert_eq!(r.ph, 8.5);
        assert_eq!(r.dissolved_oxygen, 8.0);
        assert_eq!(r.bod, 3.0);
        assert_eq!(r.total_coliform, 5000);

        let mut zeros = || 0.0;
        let window = generate_window(&mut zeros, today());
        let r = &window.records()[0];
        assert_eq!((r.ph, r.dissolved_oxygen, r.bod, r.total_coliform), (6.0, 4.0, 1.0, 0));
    }

    #[test]
    fn today_is_present_exactly_once_and_found() {
        let window = DailyWindow::generate(&mut XorShift(42), &FixedClock(today()));
        let count = window.records().iter().filter(|r| r.date == today()).count();
        assert_eq!(count, 1);
        let record = window.today_record().unwrap();
        assert_eq!(record.date, today());
        assert_eq!(record.id, 1);
    }

    #[test]
    fn today_is_found_across_year_boundary() {
        let new_year = NaiveDate::from_ymd_opt(2027, 1, 2).unwrap();
        let window = generate_window(&mut XorShift(3), new_year);
        assert_eq!(window.today_record().unwrap().date, new_year);
        assert_eq!(window.records()[0].date, NaiveDate::from_ymd_opt(2026, 12, 23).unwrap());
    }

    #[test]
    fn missing_today_falls_back_to_first_record() {
        let generated = generate_window(&mut XorShift(9), today());
        let shifted = DailyWindow::from_records(
            today() + TimeDelta::days(100),
            generated.records().to_vec(),
        );
        assert_eq!(shifted.today_record(), generated.records().first());

        let empty = DailyWindow::from_records(today(), Vec::new());
        assert!(empty.today_record().is_none());
    }

    #[test]
    fn scripted_source_sets_exact_values() {
        // ph, do, bod, coliform per record
        let script = [0.5, 0.5, 0.5, 0.5];
        let mut i = 0usize;
        let mut scripted = move || {
            let v = script[i % script.len()];
            i += 1;
            v
        };
        let window = generate_window(&mut scripted, today());
        let r = window.today_record().unwrap();
        assert_eq!(r.ph, 7.25);
        assert_eq!(r.dissolved_oxygen, 6.0);
        assert_eq!(r.bod, 2.0);
        assert_eq!(r.total_coliform, 2500);
    }
}
