//! # API REST
//!
//! REST API implementation for imprex.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for request/response bodies and `imprex-core` for the analysis itself.

#![warn(rust_2018_idioms)]

use api_shared::{AnalyseReq, AnalyseRes, DetectJointReq, DetectJointRes, HealthRes, HealthService};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use imprex_core::{ReportError, ReportService};
use imprex_types::JointId;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService,
}

impl AppState {
    pub fn new(report_service: ReportService) -> Self {
        Self { report_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, detect_joint, analyse),
    components(schemas(HealthRes, DetectJointReq, DetectJointRes, AnalyseReq, AnalyseRes))
)]
pub struct ApiDoc;

/// Router with every endpoint, Swagger UI at `/swagger-ui` and permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/joint", post(detect_joint))
        .route("/analyse", post(analyse))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Status code and message for an analysis failure.
///
/// Input problems are `400`; text that is well-formed but cannot be analysed is `422`.
pub fn error_response(err: &ReportError) -> (StatusCode, &'static str) {
    match err {
        ReportError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
        ReportError::UnidentifiableJoint => {
            (StatusCode::UNPROCESSABLE_ENTITY, "Could not identify joint type")
        }
        ReportError::UnsupportedJoint(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "Joint is not yet supported")
        }
        ReportError::NoFindingsExtracted => {
            (StatusCode::UNPROCESSABLE_ENTITY, "No findings could be extracted")
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/joint",
    request_body = DetectJointReq,
    responses(
        (status = 200, description = "Detected joint, or null", body = DetectJointRes),
        (status = 400, description = "Bad request")
    )
)]
/// Detect which joint an impression describes.
///
/// An unidentifiable joint is not an error here: the response carries `null`.
#[axum::debug_handler]
async fn detect_joint(
    State(state): State<AppState>,
    Json(req): Json<DetectJointReq>,
) -> Result<Json<DetectJointRes>, (StatusCode, &'static str)> {
    match state.report_service.detect(&req.text) {
        Ok(joint) => Ok(Json(DetectJointRes {
            joint: Some(joint.as_str().to_string()),
        })),
        Err(ReportError::UnidentifiableJoint) => Ok(Json(DetectJointRes { joint: None })),
        Err(e) => {
            tracing::warn!("Detect joint error: {e}");
            Err(error_response(&e))
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyse",
    request_body = AnalyseReq,
    responses(
        (status = 200, description = "Presentation records for the report", body = AnalyseRes),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Report could not be analysed")
    )
)]
/// Analyse an impression section into presentation records.
///
/// # Errors
/// Returns `400 Bad Request` for empty or oversized text or an unknown joint name, and
/// `422 Unprocessable Entity` when the joint is unidentifiable or unsupported or no findings
/// were extracted.
#[axum::debug_handler]
async fn analyse(
    State(state): State<AppState>,
    Json(req): Json<AnalyseReq>,
) -> Result<Json<AnalyseRes>, (StatusCode, &'static str)> {
    let hint = match req.joint.as_deref().map(str::trim).filter(|j| !j.is_empty()) {
        Some(name) => match name.parse::<JointId>() {
            Ok(joint) => Some(joint),
            Err(e) => {
                tracing::warn!("Analyse error: {e}");
                return Err((StatusCode::BAD_REQUEST, "Unknown joint"));
            }
        },
        None => None,
    };

    match state.report_service.analyse(&req.text, hint) {
        Ok(analysis) => Ok(Json(AnalyseRes::new(
            analysis.joint.as_str(),
            analysis.records,
            analysis
                .unmapped_structures
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        ))),
        Err(e) => {
            tracing::warn!("Analyse error: {e}");
            Err(error_response(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const SAMPLE: &str = "1. Complete tear of the ACL with associated bone bruising of the lateral femoral condyle. 2. Moderate joint effusion.";

    fn test_app() -> Router {
        app(AppState::new(ReportService::default()))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn test_detect_joint() {
        let response = test_app()
            .oneshot(post_json("/joint", serde_json::json!({ "text": SAMPLE })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["joint"], "knee");
    }

    #[tokio::test]
    async fn test_detect_joint_unknown_is_null() {
        let response = test_app()
            .oneshot(post_json(
                "/joint",
                serde_json::json!({ "text": "Recommend clinical correlation." }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["joint"].is_null());
    }

    #[tokio::test]
    async fn test_analyse_sample_report() {
        let response = test_app()
            .oneshot(post_json("/analyse", serde_json::json!({ "text": SAMPLE })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["joint"], "knee");
        let ids: Vec<&str> = json["findings"]
            .as_array()
            .expect("findings array")
            .iter()
            .filter_map(|f| f["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["acl_0", "lateral_femoral_condyle_1", "effusion_2"]);
        assert!(json["analysisId"].is_string());
    }

    #[tokio::test]
    async fn test_analyse_unknown_joint_name_is_bad_request() {
        let response = test_app()
            .oneshot(post_json(
                "/analyse",
                serde_json::json!({ "text": SAMPLE, "joint": "elbow" }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyse_empty_text_is_bad_request() {
        let response = test_app()
            .oneshot(post_json("/analyse", serde_json::json!({ "text": "  " })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyse_hip_is_unprocessable() {
        let response = test_app()
            .oneshot(post_json(
                "/analyse",
                serde_json::json!({ "text": SAMPLE, "joint": "hip" }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            error_response(&ReportError::InvalidInput("x".into())).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(&ReportError::NoFindingsExtracted).0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            error_response(&ReportError::UnidentifiableJoint).0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
