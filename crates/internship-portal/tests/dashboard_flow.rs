//! Integration specifications for the admin dashboard candidate flow.
//!
//! Scenarios run end-to-end through the public controller facade and the HTTP
//! router so the view-state machine, ranking, and the scoring port are
//! exercised together without reaching into private modules.

mod common {
    use std::sync::Arc;

    use internship_portal::portal::catalog::JobCatalog;
    use internship_portal::portal::dashboard::{DashboardController, SimulatedScoringService};

    pub(super) fn build_controller() -> Arc<DashboardController<SimulatedScoringService>> {
        Arc::new(DashboardController::new(
            Arc::new(JobCatalog::standard()),
            Arc::new(SimulatedScoringService::instant()),
        ))
    }
}

mod controller {
    use super::common::*;
    use internship_portal::portal::catalog::JobId;
    use internship_portal::portal::dashboard::{
        CandidateFlowView, CandidateTab, DashboardError, Section,
    };

    #[tokio::test]
    async fn seeded_catalog_drives_the_full_candidate_cycle() {
        let controller = build_controller();
        controller.select_section(Section::Jobs);

        let view = controller
            .open_candidate_dialog(JobId(1))
            .expect("dialog opens");
        match view {
            CandidateFlowView::Initial { job_title, rows } => {
                assert_eq!(job_title, "AI Research Intern");
                assert_eq!(rows.len(), 5);
                assert!(rows.iter().all(|row| row.score.is_none()));
            }
            other => panic!("expected initial view, got {other:?}"),
        }

        controller.submit_candidates().expect("submit accepted");
        controller
            .process_candidates()
            .await
            .expect("scoring completes");

        let view = controller
            .select_tab(CandidateTab::Shortlisted)
            .expect("tab switches");
        match view {
            CandidateFlowView::Results { rows, .. } => {
                let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
                assert_eq!(names, vec!["Priya Singh", "Vikash Das", "Sneha Kumar"]);
                let scores: Vec<u8> = rows.iter().map(|row| row.score.expect("scored")).collect();
                assert_eq!(scores, vec![92, 90, 88]);
            }
            other => panic!("expected results view, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn job_without_applications_produces_an_empty_shortlist() {
        let controller = build_controller();
        controller
            .open_candidate_dialog(JobId(2))
            .expect("dialog opens");
        controller.submit_candidates().expect("submit accepted");
        controller
            .process_candidates()
            .await
            .expect("scoring completes");

        let rows = controller.shortlist_rows().expect("shortlist available");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn unknown_job_is_rejected_before_any_state_changes() {
        let controller = build_controller();
        match controller.open_candidate_dialog(JobId(404)) {
            Err(DashboardError::UnknownJob(id)) => assert_eq!(id, JobId(404)),
            other => panic!("expected unknown job, got {other:?}"),
        }
        assert_eq!(controller.state().open_dialog, None);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use internship_portal::portal::dashboard::dashboard_router;
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test(start_paused = true)]
    async fn candidate_flow_over_http_lands_on_scored_results() {
        let router = dashboard_router(build_controller());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/dashboard/jobs/1/candidates")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/dashboard/candidates/submit")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        // Instant scoring resolves once the spawned task gets the runtime.
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/dashboard/candidates")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let payload: Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload.get("step"), Some(&Value::from("results")));
        let rows = payload["rows"].as_array().expect("rows");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["name"], "Priya Singh");
        assert_eq!(rows[0]["band"], "strong");
    }

    #[tokio::test]
    async fn shortlist_report_downloads_as_csv() {
        let controller = build_controller();
        controller
            .open_candidate_dialog(internship_portal::portal::catalog::JobId(1))
            .expect("dialog opens");
        controller.submit_candidates().expect("submit accepted");
        controller
            .process_candidates()
            .await
            .expect("scoring completes");

        let router = dashboard_router(controller);
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/dashboard/candidates/shortlist.csv")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .expect("content type"),
            "text/csv"
        );

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let csv = String::from_utf8(body.to_vec()).expect("utf8 body");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Name,Email,Experience,Score");
        assert!(lines[1].starts_with("Priya Singh,"));
    }
}
