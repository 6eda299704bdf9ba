//! Pay-cycle resolution.
//!
//! A pay cycle "belonging" to a month runs from the 21st of the
//! preceding month (00:00:00) to the 27th of the month itself
//! (23:59:59).  The overlap with neighbouring cycles is existing
//! business logic and is reproduced exactly.

use crate::error::{PayrollError, Result};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Day of the preceding month on which a cycle starts.
pub const CYCLE_START_DAY: u32 = 21;
/// Day of the target month on which a cycle ends.
pub const CYCLE_END_DAY: u32 = 27;

/// Inclusive bounds of one pay cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCycle {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PayCycle {
    /// Whether the given day, taken at midnight, falls inside the cycle.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let at = date.and_time(NaiveTime::MIN);
        at >= self.start && at <= self.end
    }

    /// Every date of the cycle in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end.date();
        self.start.date().iter_days().take_while(move |d| *d <= end)
    }
}

/// Offsets the first of January of `year` by `months` (which may be
/// negative) and lands on `day`.
fn month_day(year: i32, months: i64, day: u32) -> Option<NaiveDate> {
    let anchor = NaiveDate::from_ymd_opt(year, 1, day)?;
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        anchor.checked_add_months(magnitude)
    } else {
        anchor.checked_sub_months(magnitude)
    }
}

/// Resolves the pay cycle for a 0-based month index of `target_year`.
///
/// Month indices outside `0..12` roll over into neighbouring years, so
/// `resolve_cycle(2024, 0)` starts on 2023-12-21.
///
/// # Errors
///
/// [`PayrollError::DateOutOfRange`] when the resulting dates fall
/// outside the range chrono can represent (roughly ±262,000 years).
pub fn resolve_cycle(target_year: i32, target_month_index: i32) -> Result<PayCycle> {
    let out_of_range = || PayrollError::DateOutOfRange {
        year: target_year,
        month_index: target_month_index,
    };
    let index = i64::from(target_month_index);
    let start = month_day(target_year, index - 1, CYCLE_START_DAY).ok_or_else(out_of_range)?;
    let end = month_day(target_year, index, CYCLE_END_DAY).ok_or_else(out_of_range)?;
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).ok_or_else(out_of_range)?;
    Ok(PayCycle {
        start: start.and_time(NaiveTime::MIN),
        end: end.and_time(end_of_day),
    })
}

/// Moves `offset` cycles forward (or back) from a year/month-index pair
/// and returns the normalised pair.
pub fn shift_month(year: i32, month_index: i32, offset: i32) -> Result<(i32, i32)> {
    let out_of_range = || PayrollError::DateOutOfRange { year, month_index };
    let target = month_day(year, i64::from(month_index) + i64::from(offset), 1)
        .ok_or_else(out_of_range)?;
    Ok((target.year(), target.month0() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_january_rolls_into_previous_december() {
        let cycle = resolve_cycle(2024, 0).unwrap();
        assert_eq!(cycle.start, dt(2023, 12, 21, 0, 0, 0));
        assert_eq!(cycle.end, dt(2024, 1, 27, 23, 59, 59));
    }

    #[test]
    fn test_mid_year_cycle() {
        let cycle = resolve_cycle(2024, 2).unwrap();
        assert_eq!(cycle.start, dt(2024, 2, 21, 0, 0, 0));
        assert_eq!(cycle.end, dt(2024, 3, 27, 23, 59, 59));
        // 2024 is a leap year: 21..=29 Feb plus 1..=27 Mar.
        assert_eq!(cycle.days().count(), 9 + 27);
    }

    #[test]
    fn test_month_index_overflow_and_underflow() {
        let cycle = resolve_cycle(2024, 12).unwrap();
        assert_eq!(cycle.start, dt(2024, 12, 21, 0, 0, 0));
        assert_eq!(cycle.end, dt(2025, 1, 27, 23, 59, 59));

        let cycle = resolve_cycle(2024, -1).unwrap();
        assert_eq!(cycle.start, dt(2023, 11, 21, 0, 0, 0));
        assert_eq!(cycle.end, dt(2023, 12, 27, 23, 59, 59));

        let cycle = resolve_cycle(2024, 25).unwrap();
        assert_eq!(cycle.start, dt(2026, 1, 21, 0, 0, 0));
        assert_eq!(cycle.end, dt(2026, 2, 27, 23, 59, 59));
    }

    #[test]
    fn test_unrepresentable_year_is_an_error() {
        assert!(matches!(
            resolve_cycle(i32::MAX, 0),
            Err(PayrollError::DateOutOfRange { .. })
        ));
        assert!(resolve_cycle(2024, i32::MIN).is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let cycle = resolve_cycle(2024, 0).unwrap();
        assert!(cycle.contains(NaiveDate::from_ymd_opt(2023, 12, 21).unwrap()));
        assert!(cycle.contains(NaiveDate::from_ymd_opt(2024, 1, 27).unwrap()));
        assert!(!cycle.contains(NaiveDate::from_ymd_opt(2023, 12, 20).unwrap()));
        assert!(!cycle.contains(NaiveDate::from_ymd_opt(2024, 1, 28).unwrap()));
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(2024, 0, -1).unwrap(), (2023, 11));
        assert_eq!(shift_month(2024, 11, 1).unwrap(), (2025, 0));
        assert_eq!(shift_month(2024, 5, 0).unwrap(), (2024, 5));
        assert_eq!(shift_month(2024, 14, 0).unwrap(), (2025, 2));
    }
}
