//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, reading configuration from the environment.
//!
//! ## Intended use
//! Useful for development when you only want the REST server with Swagger UI. The workspace's
//! main `imprex-run` binary serves the same router.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{app, AppState};
use imprex_core::config::max_report_chars_from_env_value;
use imprex_core::constants::MAX_REPORT_CHARS_ENV;
use imprex_core::{CoreConfig, ReportService};

/// Starts the REST API server on `IMPREX_REST_ADDR` (default `0.0.0.0:3000`).
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - `IMPREX_MAX_REPORT_CHARS` is not a positive integer,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("imprex_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("IMPREX_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let max_report_chars =
        max_report_chars_from_env_value(std::env::var(MAX_REPORT_CHARS_ENV).ok())?;
    let cfg = Arc::new(CoreConfig::new(max_report_chars)?);

    tracing::info!("-- Starting imprex REST API on {}", addr);

    let state = AppState::new(ReportService::new(cfg));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
