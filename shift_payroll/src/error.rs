//! Error types for the payroll engine.
//!
//! The calculation itself is total over any date chrono can
//! represent; the variants here cover the boundary where input is
//! parsed or loaded.

use thiserror::Error;

/// Errors produced by the payroll library.
#[derive(Error, Debug)]
pub enum PayrollError {
    /// The requested year/month cannot be represented by the calendar.
    #[error("pay cycle for year {year}, month index {month_index} is outside the supported calendar range")]
    DateOutOfRange { year: i32, month_index: i32 },

    /// A date key was not in the canonical `YYYY-MM-DD` form.
    #[error("invalid date key {0:?}, expected YYYY-MM-DD")]
    InvalidDateKey(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PayrollError>;
