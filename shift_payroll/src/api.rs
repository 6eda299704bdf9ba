//! HTTP API for the payroll engine.
//!
//! This module exposes a minimal REST API around the payroll engine
//! using the [`axum`](https://crates.io/crates/axum) framework.  Clients
//! submit their day log for a cycle and receive the summary in JSON;
//! two read-only endpoints expose the cycle bounds and calendar grid.
//! The only shared state is the salary settings loaded at start-up,
//! which requests may override.

use crate::calendar::CalendarView;
use crate::config::{load_optional_settings, AppConfig, PayrollSettings};
use crate::cycle::{resolve_cycle, PayCycle};
use crate::day_log::DayLog;
use crate::engine::calculate_payroll;
use crate::error::PayrollError;
use crate::models::{sum_allowances, Allowance, PayrollSummary, SalaryConfig};
use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Application state shared across requests.
pub struct AppState {
    pub settings: PayrollSettings,
}

/// Body of `POST /api/payroll`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRequest {
    /// Logged days; a later entry for the same date replaces an earlier one.
    #[serde(default)]
    pub days: DayLog,
    /// Overrides the configured salary settings.
    pub config: Option<SalaryConfig>,
    /// Overrides the configured allowance line items.
    pub allowances: Option<Vec<Allowance>>,
    /// Pre-summed allowances; takes precedence over any line items.
    pub allowances_total: Option<f64>,
    pub year: i32,
    pub month_index: i32,
}

/// Query of the cycle and calendar endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleQuery {
    pub year: i32,
    pub month_index: i32,
}

/// Errors returned to API clients.
#[derive(Debug)]
pub struct ApiError(PayrollError);

impl From<PayrollError> for ApiError {
    fn from(err: PayrollError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self.0);
        let status = match self.0 {
            PayrollError::DateOutOfRange { .. } | PayrollError::InvalidDateKey(_) => {
                StatusCode::BAD_REQUEST
            }
        };
        let body = Json(serde_json::json!({"error": self.0.to_string()}));
        (status, body).into_response()
    }
}

/// Build the API router around the given settings.
pub fn build_router(settings: PayrollSettings) -> Router {
    let state = Arc::new(AppState { settings });
    Router::new()
        .route("/api/payroll", post(payroll_handler))
        .route("/api/cycle", get(cycle_handler))
        .route("/api/calendar", get(calendar_handler))
        .with_state(state)
}

/// Handler for POST /api/payroll
async fn payroll_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<PayrollRequest>,
) -> Result<Json<PayrollSummary>, ApiError> {
    let settings = &app_state.settings;
    let config = request.config.as_ref().unwrap_or(&settings.config);
    let allowances_total = match (request.allowances_total, &request.allowances) {
        (Some(total), _) => total,
        (None, Some(items)) => sum_allowances(items),
        (None, None) => settings.allowances_total(),
    };
    let summary = calculate_payroll(
        &request.days,
        config,
        allowances_total,
        request.month_index,
        request.year,
    )?;
    Ok(Json(summary))
}

/// Handler for GET /api/cycle
async fn cycle_handler(Query(query): Query<CycleQuery>) -> Result<Json<PayCycle>, ApiError> {
    Ok(Json(resolve_cycle(query.year, query.month_index)?))
}

/// Handler for GET /api/calendar
async fn calendar_handler(
    Query(query): Query<CycleQuery>,
) -> Result<Json<CalendarView>, ApiError> {
    Ok(Json(CalendarView::build(query.year, query.month_index)?))
}

/// Launch the API server.  Settings are loaded from the configured
/// file, if any, and the server runs until it terminates.
pub async fn serve(config: AppConfig) -> Result<()> {
    let settings = load_optional_settings(config.settings_path.as_deref())?;
    let router = build_router(settings);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Binding {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "server listening");
    axum::serve(listener, router).await.context("Serving HTTP API")
}
