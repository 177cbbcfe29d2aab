use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::report;
use super::scoring::CandidateScoringService;
use super::state::{CandidateTab, DashboardState, Section};
use super::{
    AdminProfile, CandidateFlowView, DashboardController, JobCardView, JobDetailView,
    ProfileUpdate,
};
use crate::error::AppError;
use crate::portal::catalog::JobId;

/// Router exposing the dashboard, jobs, and mock login endpoints over a
/// shared controller.
pub fn dashboard_router<S>(controller: Arc<DashboardController<S>>) -> Router
where
    S: CandidateScoringService + 'static,
{
    Router::new()
        .route("/api/v1/auth/login", post(login_handler::<S>))
        .route("/api/v1/jobs", get(jobs_handler::<S>))
        .route("/api/v1/dashboard/state", get(state_handler::<S>))
        .route("/api/v1/dashboard/section", post(section_handler::<S>))
        .route(
            "/api/v1/dashboard/profile",
            get(profile_handler::<S>).put(save_profile_handler::<S>),
        )
        .route(
            "/api/v1/dashboard/profile/edit",
            post(open_profile_handler::<S>),
        )
        .route("/api/v1/dashboard/charts", get(charts_handler::<S>))
        .route(
            "/api/v1/dashboard/jobs/:job_id/detail",
            post(job_detail_handler::<S>),
        )
        .route(
            "/api/v1/dashboard/jobs/:job_id/candidates",
            post(open_candidates_handler::<S>),
        )
        .route(
            "/api/v1/dashboard/candidates",
            get(candidates_view_handler::<S>),
        )
        .route(
            "/api/v1/dashboard/candidates/submit",
            post(submit_handler::<S>),
        )
        .route("/api/v1/dashboard/candidates/tab", post(tab_handler::<S>))
        .route(
            "/api/v1/dashboard/candidates/report.csv",
            get(report_csv_handler::<S>),
        )
        .route(
            "/api/v1/dashboard/candidates/shortlist.csv",
            get(shortlist_csv_handler::<S>),
        )
        .route("/api/v1/dashboard/close", post(close_handler::<S>))
        .with_state(controller)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    // Accepted and discarded; no verification exists.
    #[allow(dead_code)]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SectionRequest {
    pub(crate) section: Section,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TabRequest {
    pub(crate) tab: CandidateTab,
}

pub(crate) async fn login_handler<S>(
    State(_controller): State<Arc<DashboardController<S>>>,
    Json(request): Json<LoginRequest>,
) -> Json<serde_json::Value>
where
    S: CandidateScoringService + 'static,
{
    // The password never reaches the logs.
    info!(email = %request.email, "login attempt received");
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn jobs_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Json<Vec<JobCardView>>
where
    S: CandidateScoringService + 'static,
{
    Json(controller.job_cards())
}

pub(crate) async fn state_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Json<DashboardState>
where
    S: CandidateScoringService + 'static,
{
    Json(controller.state())
}

pub(crate) async fn section_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
    Json(request): Json<SectionRequest>,
) -> Json<DashboardState>
where
    S: CandidateScoringService + 'static,
{
    controller.select_section(request.section);
    Json(controller.state())
}

pub(crate) async fn profile_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Json<AdminProfile>
where
    S: CandidateScoringService + 'static,
{
    Json(controller.profile())
}

pub(crate) async fn open_profile_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Json<DashboardState>
where
    S: CandidateScoringService + 'static,
{
    controller.open_profile_editor();
    Json(controller.state())
}

pub(crate) async fn save_profile_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
    Json(update): Json<ProfileUpdate>,
) -> Json<AdminProfile>
where
    S: CandidateScoringService + 'static,
{
    Json(controller.save_profile(update))
}

pub(crate) async fn charts_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Json<super::DashboardCharts>
where
    S: CandidateScoringService + 'static,
{
    Json(controller.charts().clone())
}

pub(crate) async fn job_detail_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
    Path(job_id): Path<u32>,
) -> Result<Json<JobDetailView>, AppError>
where
    S: CandidateScoringService + 'static,
{
    let view = controller.open_job_detail(JobId(job_id))?;
    Ok(Json(view))
}

pub(crate) async fn open_candidates_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
    Path(job_id): Path<u32>,
) -> Result<Json<CandidateFlowView>, AppError>
where
    S: CandidateScoringService + 'static,
{
    let view = controller.open_candidate_dialog(JobId(job_id))?;
    Ok(Json(view))
}

pub(crate) async fn candidates_view_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Result<Json<CandidateFlowView>, AppError>
where
    S: CandidateScoringService + 'static,
{
    Ok(Json(controller.candidate_flow_view()?))
}

/// Moves the flow to `loading` and schedules the scoring run. The spawned
/// task is never awaited by a request; clients poll the flow view until it
/// reaches `results`.
pub(crate) async fn submit_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Result<Json<CandidateFlowView>, AppError>
where
    S: CandidateScoringService + 'static,
{
    controller.submit_candidates()?;

    let worker = controller.clone();
    tokio::spawn(async move {
        if let Err(err) = worker.process_candidates().await {
            tracing::warn!(error = %err, "candidate scoring run failed");
        }
    });

    Ok(Json(controller.candidate_flow_view()?))
}

pub(crate) async fn tab_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
    Json(request): Json<TabRequest>,
) -> Result<Json<CandidateFlowView>, AppError>
where
    S: CandidateScoringService + 'static,
{
    Ok(Json(controller.select_tab(request.tab)?))
}

pub(crate) async fn report_csv_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Result<impl IntoResponse, AppError>
where
    S: CandidateScoringService + 'static,
{
    let rows = controller.results_rows()?;
    let csv = report::candidate_table_csv(&rows)?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], csv))
}

pub(crate) async fn shortlist_csv_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Result<impl IntoResponse, AppError>
where
    S: CandidateScoringService + 'static,
{
    let rows = controller.shortlist_rows()?;
    let csv = report::candidate_table_csv(&rows)?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], csv))
}

pub(crate) async fn close_handler<S>(
    State(controller): State<Arc<DashboardController<S>>>,
) -> Json<DashboardState>
where
    S: CandidateScoringService + 'static,
{
    controller.close_dialog();
    Json(controller.state())
}
