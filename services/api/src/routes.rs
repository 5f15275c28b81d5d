use crate::infra::{AppState, SettingsView};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use interview_hub::workflows::interviews::{
    interview_router, CatalogRepository, InterviewService,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_interview_routes<C>(service: Arc<InterviewService<C>>) -> axum::Router
where
    C: CatalogRepository + 'static,
{
    interview_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/settings", axum::routing::get(settings_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn settings_endpoint(Extension(state): Extension<AppState>) -> Json<SettingsView> {
    Json(state.settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seeded_service;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use interview_hub::config::{AppEnvironment, OrganizationConfig};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            settings: SettingsView::new(
                AppEnvironment::Development,
                &OrganizationConfig {
                    company_name: "Interview Spark Hub".to_string(),
                    admin_email: "admin@interviewsparkhub.com".to_string(),
                },
            ),
        }
    }

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(seeded_service().expect("seeded service"));
        with_interview_routes(service).layer(Extension(test_state(ready)))
    }

    async fn get(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&body).unwrap_or_default())
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, body) = get(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, body) = get(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn settings_expose_organization() {
        let (status, body) = get(app(true), "/api/v1/settings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company_name"], "Interview Spark Hub");
        assert_eq!(body["admin_email"], "admin@interviewsparkhub.com");
        assert_eq!(body["environment"], "development");
    }

    #[tokio::test]
    async fn interview_routes_are_mounted() {
        let (status, body) = get(app(true), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = get(app(true), "/api/v1/interviews/i1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Frontend Developer Interview - Q2 2025");
    }
}
