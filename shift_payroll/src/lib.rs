//! Shift Payroll library crate.
//!
//! This crate computes a single employee's payroll for one pay cycle
//! (the 21st of the previous month to the 27th of the target month)
//! from a day-by-day log of shifts, leave, holidays and overtime.
//! External applications may call [`engine::calculate_payroll`]
//! directly or embed the API via [`api::build_router`].

pub mod error;
pub mod models;
pub mod cycle;
pub mod engine;
pub mod day_log;
pub mod calendar;
pub mod format;
pub mod config;
pub mod api;

pub use cycle::{resolve_cycle, PayCycle};
pub use engine::calculate_payroll;
pub use error::PayrollError;
pub use models::{DayRecord, LeaveType, PayrollSummary, SalaryConfig, ShiftType};
