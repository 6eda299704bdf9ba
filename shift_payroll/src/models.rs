//! Data models for the payroll engine.
//!
//! The `models` module defines the serialisable records the engine
//! consumes and produces: one [`DayRecord`] per logged calendar day, the
//! [`SalaryConfig`] used to derive daily and hourly rates, flat
//! [`Allowance`] line items, and the computed [`PayrollSummary`].  Field
//! names serialise in camelCase so that records exchanged with the
//! front end keep their familiar shape.

use crate::error::{PayrollError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical date key format for day records.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Whether and when a regular shift was worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShiftType {
    #[default]
    None,
    Day,
    Night,
}

/// Leave status for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveType {
    #[default]
    None,
    /// Paid leave.  Counts as a worked day.
    Paid,
    /// Sick leave.  Neither counted nor paid.
    Sick,
}

/// One calendar day's logged status.
///
/// Records are value objects: the editing helpers in
/// [`crate::day_log`] return replacement records rather than mutating
/// one the calculator may be reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// The day this record describes, exchanged as `YYYY-MM-DD`.
    #[serde(with = "date_key")]
    pub date: NaiveDate,
    #[serde(default)]
    pub shift: ShiftType,
    #[serde(default)]
    pub leave: LeaveType,
    /// Statutory holiday flag, independent of shift and leave.
    #[serde(default)]
    pub is_holiday: bool,
    /// Overtime worked that day.  Expected to be non-negative; the
    /// editor clamps it at zero.
    #[serde(default)]
    pub overtime_hours: f64,
}

impl DayRecord {
    /// A blank record: no shift, no leave, not a holiday, no overtime.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            shift: ShiftType::None,
            leave: LeaveType::None,
            is_holiday: false,
            overtime_hours: 0.0,
        }
    }

    /// The canonical `YYYY-MM-DD` key of this record.
    pub fn date_key(&self) -> String {
        to_date_key(self.date)
    }

    /// Whether the day counts toward base-salary proration.  Paid leave
    /// counts regardless of the shift; otherwise any shift counts.
    pub fn is_worked_day(&self) -> bool {
        match self.leave {
            LeaveType::Paid => true,
            LeaveType::None | LeaveType::Sick => self.shift != ShiftType::None,
        }
    }
}

/// Formats a date as its canonical zero-padded `YYYY-MM-DD` key.
pub fn to_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a canonical `YYYY-MM-DD` key.
///
/// Only the zero-padded form is accepted, so keys keep sorting in
/// chronological order.
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    let well_formed = key.len() == 10
        && key
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    if !well_formed {
        return Err(PayrollError::InvalidDateKey(key.to_string()));
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| PayrollError::InvalidDateKey(key.to_string()))
}

/// Serde adapter holding `NaiveDate` fields to the canonical key form.
///
/// chrono's own deserializer is lenient about padding and signs, which
/// would let non-canonical keys into a day log.
pub mod date_key {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_date_key(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        super::parse_date_key(&key).map_err(de::Error::custom)
    }
}

/// Salary configuration used to derive the daily and hourly rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryConfig {
    /// Monthly base salary in whole currency units.
    pub base_salary: f64,
    /// Working days the base salary is divided by.  Zero yields zero
    /// rates rather than an error.
    pub standard_work_days: f64,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            base_salary: 0.0,
            standard_work_days: 26.0,
        }
    }
}

/// A flat allowance line item (meal, transport, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allowance {
    pub name: String,
    pub amount: f64,
}

/// Pre-sums allowance line items into the flat total the calculator takes.
pub fn sum_allowances(allowances: &[Allowance]) -> f64 {
    allowances.iter().map(|a| a.amount).sum()
}

/// The computed payroll for one cycle.
///
/// Currency amounts are rounded to whole units and day/hour totals to
/// one decimal, so consumers only need to format them.  The per-tier
/// hour buckets are reported as accumulated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub total_work_days: f64,
    #[serde(rename = "totalOTHours")]
    pub total_ot_hours: f64,
    pub ot_hours_normal: f64,
    pub ot_hours_sunday: f64,
    pub ot_hours_holiday_x2: f64,
    pub ot_hours_holiday_x3: f64,
    pub ot_amount_normal: f64,
    pub ot_amount_sunday: f64,
    pub ot_amount_holiday_x2: f64,
    pub ot_amount_holiday_x3: f64,
    pub total_allowances: f64,
    pub ot_income: f64,
    pub base_income: f64,
    pub total_income: f64,
    pub daily_rate: f64,
    pub hourly_rate: f64,
}
