use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, app};
use imprex_core::config::max_report_chars_from_env_value;
use imprex_core::constants::MAX_REPORT_CHARS_ENV;
use imprex_core::{CoreConfig, ReportService};

/// Resolve the engine configuration from an optional `IMPREX_MAX_REPORT_CHARS` value.
fn core_config(max_report_chars: Option<String>) -> anyhow::Result<Arc<CoreConfig>> {
    let max_report_chars = max_report_chars_from_env_value(max_report_chars)?;
    Ok(Arc::new(CoreConfig::new(max_report_chars)?))
}

/// Main entry point for the imprex application.
///
/// Serves the REST API (with Swagger UI at `/swagger-ui`) on `IMPREX_REST_ADDR`.
///
/// # Environment Variables
/// - `IMPREX_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `IMPREX_MAX_REPORT_CHARS`: longest accepted report (default: 20000)
///
/// # Errors
/// Returns an error if configuration is invalid, the address cannot be bound, or the server
/// fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("imprex_run=info".parse()?)
                .add_directive("imprex_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("IMPREX_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;
    let cfg = core_config(std::env::var(MAX_REPORT_CHARS_ENV).ok())?;

    tracing::info!(
        max_report_chars = cfg.max_report_chars(),
        "++ Starting imprex REST on {}",
        rest_addr
    );

    let rest_app = app(AppState::new(ReportService::new(cfg)));
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, rest_app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[test]
    fn test_core_config_defaults_and_validates() {
        assert_eq!(
            core_config(None).expect("default").max_report_chars(),
            imprex_core::constants::DEFAULT_MAX_REPORT_CHARS
        );
        assert!(core_config(Some("0".into())).is_err());
        assert_eq!(
            core_config(Some("500".into())).expect("parse").max_report_chars(),
            500
        );
    }

    #[tokio::test]
    async fn test_served_router_answers_health() {
        let cfg = core_config(None).expect("config");
        let response = app(AppState::new(ReportService::new(cfg)))
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        assert!(String::from_utf8_lossy(&bytes).contains("imprex is alive"));
    }
}
