use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// Inclusive iterator over consecutive calendar days.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// The range `[anchor - before, anchor + after]`.
    pub fn around(anchor: NaiveDate, before: i64, after: i64) -> DateRange {
        DateRange(
            anchor - TimeDelta::days(before),
            anchor + TimeDelta::days(after),
        )
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0.succ_opt()?;
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn around_spans_fifteen_days_across_month_end() {
        let anchor = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let dates: Vec<NaiveDate> = DateRange::around(anchor, 10, 4).collect();
        assert_eq!(dates.len(), 15);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 2, 21).unwrap());
        assert_eq!(dates[10], anchor);
        assert_eq!(dates[14], NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
    }

    #[test]
    fn single_day() {
        let start = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        let dates: Vec<NaiveDate> = DateRange(start, start).collect();
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn reversed_range_is_empty() {
        let start = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
        assert_eq!(DateRange(start, end).count(), 0);
    }
}
