use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use internship_portal::portal::dashboard::{dashboard_router, CandidateScoringService, DashboardController};
use internship_portal::portal::site::SiteContent;
use serde_json::json;
use std::sync::Arc;

/// The full HTTP surface: the dashboard and auth routes from the library
/// crate plus the public site content and operational endpoints.
pub(crate) fn with_portal_routes<S>(controller: Arc<DashboardController<S>>) -> axum::Router
where
    S: CandidateScoringService + 'static,
{
    dashboard_router(controller)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/site/content",
            axum::routing::get(site_content_endpoint),
        )
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

pub(crate) async fn site_content_endpoint() -> Json<SiteContent> {
    Json(SiteContent::standard())
}
