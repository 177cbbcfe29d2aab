use internship_portal::config::ScoringConfig;
use internship_portal::portal::catalog::JobCatalog;
use internship_portal::portal::dashboard::{DashboardController, SimulatedScoringService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the dashboard controller over the seeded catalog, with the
/// simulated scoring pipeline honoring the configured delay.
pub(crate) fn build_controller(
    scoring: &ScoringConfig,
) -> Arc<DashboardController<SimulatedScoringService>> {
    Arc::new(DashboardController::new(
        Arc::new(JobCatalog::standard()),
        Arc::new(SimulatedScoringService::from_config(scoring)),
    ))
}
