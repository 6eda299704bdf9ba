//! Entry point for the payroll binary.
//!
//! Running this binary starts an HTTP server that exposes the payroll
//! engine.  The bind address is read from `PAYROLL_BIND_ADDR` and an
//! optional settings file from `PAYROLL_SETTINGS`; log verbosity
//! follows `RUST_LOG` and defaults to `info`.

use shift_payroll::config::AppConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    if let Err(err) = shift_payroll::api::serve(config).await {
        error!("Error running server: {:#}", err);
        std::process::exit(1);
    }
}
