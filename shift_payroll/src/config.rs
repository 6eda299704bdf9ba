//! Runtime configuration.
//!
//! The server reads its bind address and an optional settings file
//! location from the environment.  The settings file is a JSON
//! [`PayrollSettings`] document holding the salary configuration and
//! allowance line items that requests fall back to.

use crate::models::{sum_allowances, Allowance, SalaryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BIND_ADDR_VAR: &str = "PAYROLL_BIND_ADDR";
pub const SETTINGS_PATH_VAR: &str = "PAYROLL_SETTINGS";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Process-level configuration taken from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub settings_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let settings_path = lookup(SETTINGS_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self {
            bind_addr,
            settings_path,
        }
    }
}

/// Salary configuration plus allowance line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollSettings {
    #[serde(default)]
    pub config: SalaryConfig,
    #[serde(default)]
    pub allowances: Vec<Allowance>,
}

impl PayrollSettings {
    pub fn allowances_total(&self) -> f64 {
        sum_allowances(&self.allowances)
    }
}

/// Loads payroll settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<PayrollSettings> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Reading payroll settings: {}", path.display()))?;
    let settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing payroll settings JSON in {}", path.display()))?;
    Ok(settings)
}

/// Loads settings from `path` when given, otherwise returns defaults.
pub fn load_optional_settings(path: Option<&Path>) -> Result<PayrollSettings> {
    match path {
        Some(path) => load_settings(path),
        None => Ok(PayrollSettings::default()),
    }
}
