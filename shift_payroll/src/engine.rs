//! Payroll computation engine.
//!
//! The `engine` module turns a set of [`DayRecord`]s and a
//! [`SalaryConfig`] into a [`PayrollSummary`] for one pay cycle.  It
//! is a pure function of its inputs: records are filtered to the
//! cycle resolved by [`crate::cycle::resolve_cycle`], aggregated with
//! unrounded arithmetic, and only the output fields are rounded.

use crate::cycle::resolve_cycle;
use crate::error::Result;
use crate::models::{DayRecord, PayrollSummary, SalaryConfig};
use chrono::{Datelike, Weekday};
use tracing::{debug, warn};

/// Hours of a day's overtime paid at the lower holiday rate.
pub const HOLIDAY_BASE_HOURS: f64 = 8.0;
/// Working hours in a day, used to derive the hourly rate.
pub const HOURS_PER_DAY: f64 = 8.0;

/// The four mutually exclusive overtime pay-rate classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertimeTier {
    Normal,
    Sunday,
    /// First eight overtime hours on a holiday.
    HolidayX2,
    /// Holiday overtime beyond eight hours.
    HolidayX3,
}

impl OvertimeTier {
    /// Multiplier applied to the hourly rate.
    pub fn multiplier(self) -> f64 {
        match self {
            OvertimeTier::Normal => 1.5,
            OvertimeTier::Sunday => 2.0,
            OvertimeTier::HolidayX2 => 2.0,
            OvertimeTier::HolidayX3 => 3.0,
        }
    }

    /// Splits a day's overtime into `(tier, hours)` portions.  Holiday
    /// takes precedence over Sunday, Sunday over a normal day.
    pub fn split(record: &DayRecord) -> Vec<(OvertimeTier, f64)> {
        let hours = record.overtime_hours;
        if hours <= 0.0 {
            return Vec::new();
        }
        if record.is_holiday {
            let first = hours.min(HOLIDAY_BASE_HOURS);
            let extra = (hours - HOLIDAY_BASE_HOURS).max(0.0);
            vec![(OvertimeTier::HolidayX2, first), (OvertimeTier::HolidayX3, extra)]
        } else if record.date.weekday() == Weekday::Sun {
            vec![(OvertimeTier::Sunday, hours)]
        } else {
            vec![(OvertimeTier::Normal, hours)]
        }
    }
}

/// Hours and unrounded amount accumulated for one tier.
#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    hours: f64,
    amount: f64,
}

#[derive(Debug, Default)]
struct Totals {
    work_days: f64,
    ot_hours: f64,
    normal: Bucket,
    sunday: Bucket,
    holiday_x2: Bucket,
    holiday_x3: Bucket,
}

impl Totals {
    fn bucket_mut(&mut self, tier: OvertimeTier) -> &mut Bucket {
        match tier {
            OvertimeTier::Normal => &mut self.normal,
            OvertimeTier::Sunday => &mut self.sunday,
            OvertimeTier::HolidayX2 => &mut self.holiday_x2,
            OvertimeTier::HolidayX3 => &mut self.holiday_x3,
        }
    }

    fn ot_income(&self) -> f64 {
        self.normal.amount + self.sunday.amount + self.holiday_x2.amount + self.holiday_x3.amount
    }
}

/// Rounds a currency amount to the nearest whole unit, halves upward.
pub fn round_currency(amount: f64) -> f64 {
    (amount + 0.5).floor()
}

/// Rounds a day or hour total to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Daily and hourly rates for a configuration.  A non-positive
/// `standard_work_days` yields zero rates.
pub fn rates(config: &SalaryConfig) -> (f64, f64) {
    let daily = if config.standard_work_days > 0.0 {
        config.base_salary / config.standard_work_days
    } else {
        0.0
    };
    (daily, daily / HOURS_PER_DAY)
}

/// Calculates the payroll summary for the cycle of `target_month_index`
/// (0-based) in `target_year`.
///
/// Records outside the cycle are ignored.  Sick leave is neither
/// counted nor paid, but overtime logged on a sick day is still paid at
/// the tier matching the date.
///
/// # Errors
///
/// Total for every year chrono can represent (roughly ±262,000); a
/// standard-work-days value of zero degrades to zero rates instead of
/// failing.  Only a target outside that calendar range returns
/// [`PayrollError::DateOutOfRange`](crate::error::PayrollError::DateOutOfRange).
pub fn calculate_payroll<'a, I>(
    days: I,
    config: &SalaryConfig,
    allowances_total: f64,
    target_month_index: i32,
    target_year: i32,
) -> Result<PayrollSummary>
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let cycle = resolve_cycle(target_year, target_month_index)?;
    let (daily_rate, hourly_rate) = rates(config);
    if config.standard_work_days <= 0.0 {
        warn!(
            standard_work_days = config.standard_work_days,
            "standard work days is not positive; rates degrade to zero"
        );
    }

    let mut totals = Totals::default();
    let mut retained = 0usize;
    for day in days.into_iter().filter(|d| cycle.contains(d.date)) {
        retained += 1;
        if day.is_worked_day() {
            totals.work_days += 1.0;
        }
        if day.overtime_hours > 0.0 {
            totals.ot_hours += day.overtime_hours;
            for (tier, hours) in OvertimeTier::split(day) {
                let bucket = totals.bucket_mut(tier);
                bucket.hours += hours;
                bucket.amount += hours * hourly_rate * tier.multiplier();
            }
        }
    }
    debug!(
        start = %cycle.start,
        end = %cycle.end,
        retained,
        "aggregated day records for pay cycle"
    );

    let base_income = totals.work_days * daily_rate;
    let ot_income = totals.ot_income();
    let total_income = base_income + ot_income + allowances_total;

    Ok(PayrollSummary {
        total_work_days: round_tenth(totals.work_days),
        total_ot_hours: round_tenth(totals.ot_hours),
        ot_hours_normal: totals.normal.hours,
        ot_hours_sunday: totals.sunday.hours,
        ot_hours_holiday_x2: totals.holiday_x2.hours,
        ot_hours_holiday_x3: totals.holiday_x3.hours,
        ot_amount_normal: round_currency(totals.normal.amount),
        ot_amount_sunday: round_currency(totals.sunday.amount),
        ot_amount_holiday_x2: round_currency(totals.holiday_x2.amount),
        ot_amount_holiday_x3: round_currency(totals.holiday_x3.amount),
        total_allowances: round_currency(allowances_total),
        ot_income: round_currency(ot_income),
        base_income: round_currency(base_income),
        total_income: round_currency(total_income),
        daily_rate: round_currency(daily_rate),
        hourly_rate: round_currency(hourly_rate),
    })
}
