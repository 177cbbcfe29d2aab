//! Admin dashboard: view-state controller, candidate ranking, and the
//! simulated scoring pipeline behind its port.

pub mod charts;
pub mod profile;
pub mod ranking;
pub mod report;
pub mod router;
pub mod scoring;
pub mod state;

#[cfg(test)]
mod tests;

pub use charts::{ChartPoint, DashboardCharts};
pub use profile::{AdminProfile, ProfileUpdate};
pub use ranking::{ranked, shortlist, ScoreBand, SHORTLIST_SIZE};
pub use router::dashboard_router;
pub use scoring::{CandidateScoringService, ScoringError, SimulatedScoringService};
pub use state::{CandidateStep, CandidateTab, DashboardState, DialogKind, Section, ViewStateError};

use crate::portal::catalog::{Candidate, Job, JobCatalog, JobId};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Error raised by dashboard actions.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("unknown job {0}")]
    UnknownJob(JobId),
    #[error("no scoring outcome stored for the results view")]
    OutcomeMissing,
    #[error(transparent)]
    ViewState(#[from] ViewStateError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Owns the whole mutable dashboard session: the view state, the admin
/// profile, and the scoring port. The job catalog itself stays immutable.
pub struct DashboardController<S> {
    catalog: Arc<JobCatalog>,
    scoring: Arc<S>,
    state: Mutex<DashboardState>,
    profile: Mutex<AdminProfile>,
    outcome: Mutex<Option<Vec<Candidate>>>,
    /// Bumped on every candidate-dialog open. A scoring run captures the
    /// value it started under and only lands while it still matches, so a
    /// stale run can never complete a newer cycle.
    cycle: AtomicU64,
    charts: DashboardCharts,
}

impl<S> DashboardController<S>
where
    S: CandidateScoringService,
{
    pub fn new(catalog: Arc<JobCatalog>, scoring: Arc<S>) -> Self {
        Self {
            catalog,
            scoring,
            state: Mutex::new(DashboardState::default()),
            profile: Mutex::new(AdminProfile::standard()),
            outcome: Mutex::new(None),
            cycle: AtomicU64::new(0),
            charts: DashboardCharts::standard(),
        }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    pub fn charts(&self) -> &DashboardCharts {
        &self.charts
    }

    pub fn state(&self) -> DashboardState {
        self.state.lock().expect("state mutex poisoned").clone()
    }

    pub fn profile(&self) -> AdminProfile {
        self.profile.lock().expect("profile mutex poisoned").clone()
    }

    pub fn select_section(&self, section: Section) {
        self.state
            .lock()
            .expect("state mutex poisoned")
            .select_section(section);
    }

    pub fn open_profile_editor(&self) {
        self.state
            .lock()
            .expect("state mutex poisoned")
            .open_profile_editor();
    }

    /// Applies the edit and closes the dialog; the profile form saves and
    /// dismisses in one action.
    pub fn save_profile(&self, update: ProfileUpdate) -> AdminProfile {
        let mut profile = self.profile.lock().expect("profile mutex poisoned");
        profile.apply(update);
        let saved = profile.clone();
        drop(profile);

        self.state
            .lock()
            .expect("state mutex poisoned")
            .close_dialog();
        saved
    }

    pub fn job_cards(&self) -> Vec<JobCardView> {
        self.catalog.jobs().iter().map(JobCardView::from_job).collect()
    }

    pub fn open_job_detail(&self, id: JobId) -> Result<JobDetailView, DashboardError> {
        let job = self.find_job(id)?;
        let view = JobDetailView::from_job(&job);
        self.state
            .lock()
            .expect("state mutex poisoned")
            .open_job_detail(id);
        Ok(view)
    }

    /// Opens the candidate dialog for `id`, resetting the flow to a fresh
    /// `initial`/`all`, starting a new cycle, and dropping any previous
    /// scoring outcome.
    pub fn open_candidate_dialog(&self, id: JobId) -> Result<CandidateFlowView, DashboardError> {
        self.find_job(id)?;
        {
            let mut state = self.state.lock().expect("state mutex poisoned");
            state.open_candidate_dialog(id);
            self.cycle.fetch_add(1, Ordering::AcqRel);
        }
        *self.outcome.lock().expect("outcome mutex poisoned") = None;
        self.candidate_flow_view()
    }

    pub fn close_dialog(&self) {
        self.state
            .lock()
            .expect("state mutex poisoned")
            .close_dialog();
    }

    /// `initial -> loading`, synchronously. The caller is responsible for
    /// driving [`Self::process_candidates`] to completion afterwards.
    pub fn submit_candidates(&self) -> Result<(), DashboardError> {
        let mut state = self.state.lock().expect("state mutex poisoned");
        state.begin_processing()?;
        Ok(())
    }

    /// Awaits the scoring port, then moves `loading -> results`. If the
    /// dialog was closed or reopened while scoring ran, the outcome is
    /// discarded; the run itself is never cancelled. Reopens are detected by
    /// the cycle stamp, so a stale run cannot complete a newer cycle that
    /// happens to be at `loading` as well.
    pub async fn process_candidates(&self) -> Result<(), DashboardError> {
        let (job, cycle) = {
            let state = self.state.lock().expect("state mutex poisoned");
            let id = state.selected_job.ok_or(ViewStateError::DialogNotOpen)?;
            (self.find_job(id)?, self.cycle.load(Ordering::Acquire))
        };

        let scored = self.scoring.score_candidates(&job).await?;

        let mut state = self.state.lock().expect("state mutex poisoned");
        if self.cycle.load(Ordering::Acquire) != cycle {
            debug!(job = %job.id, "scoring outcome discarded, dialog was reopened");
            return Ok(());
        }
        match state.finish_processing() {
            Ok(()) => {
                *self.outcome.lock().expect("outcome mutex poisoned") = Some(scored);
                info!(job = %job.id, "candidate scoring complete");
                Ok(())
            }
            Err(err) => {
                debug!(job = %job.id, reason = %err, "scoring outcome discarded");
                Ok(())
            }
        }
    }

    pub fn select_tab(&self, tab: CandidateTab) -> Result<CandidateFlowView, DashboardError> {
        self.state
            .lock()
            .expect("state mutex poisoned")
            .select_tab(tab)?;
        self.candidate_flow_view()
    }

    /// Renders the candidate dialog for the current step and tab.
    pub fn candidate_flow_view(&self) -> Result<CandidateFlowView, DashboardError> {
        let state = self.state.lock().expect("state mutex poisoned").clone();
        if state.open_dialog != Some(DialogKind::CandidateList) {
            return Err(ViewStateError::DialogNotOpen.into());
        }
        let id = state.selected_job.ok_or(ViewStateError::DialogNotOpen)?;
        let job = self.find_job(id)?;

        let view = match state.step {
            CandidateStep::Initial => CandidateFlowView::Initial {
                job_title: job.title.clone(),
                rows: job.candidates.iter().map(CandidateRowView::unscored).collect(),
            },
            CandidateStep::Loading => CandidateFlowView::Loading {
                headline: "Processing candidates...",
                detail: "Analyzing applications and generating scores",
            },
            CandidateStep::Results => {
                let rows = match state.tab {
                    CandidateTab::All => self.results_rows()?,
                    CandidateTab::Shortlisted => self.shortlist_rows()?,
                };
                CandidateFlowView::Results {
                    job_title: job.title.clone(),
                    tab: state.tab,
                    rows,
                }
            }
        };
        Ok(view)
    }

    /// All scored candidates, descending by score. Only available once the
    /// flow has reached `results`.
    pub fn results_rows(&self) -> Result<Vec<CandidateRowView>, DashboardError> {
        let scored = self.scored_candidates()?;
        Ok(ranked(&scored)
            .iter()
            .map(CandidateRowView::scored)
            .collect())
    }

    /// The top-3 shortlist. Only available once the flow has reached
    /// `results`.
    pub fn shortlist_rows(&self) -> Result<Vec<CandidateRowView>, DashboardError> {
        let scored = self.scored_candidates()?;
        Ok(shortlist(&scored)
            .iter()
            .map(CandidateRowView::scored)
            .collect())
    }

    fn scored_candidates(&self) -> Result<Vec<Candidate>, DashboardError> {
        let state = self.state.lock().expect("state mutex poisoned");
        if state.open_dialog != Some(DialogKind::CandidateList) {
            return Err(ViewStateError::DialogNotOpen.into());
        }
        if state.step != CandidateStep::Results {
            return Err(ViewStateError::WrongStep {
                expected: CandidateStep::Results,
                actual: state.step,
            }
            .into());
        }
        drop(state);

        // `results` is only reachable through a completed scoring run, which
        // stores its outcome before the step changes.
        self.outcome
            .lock()
            .expect("outcome mutex poisoned")
            .clone()
            .ok_or(DashboardError::OutcomeMissing)
    }

    fn find_job(&self, id: JobId) -> Result<Job, DashboardError> {
        self.catalog
            .find(id)
            .cloned()
            .ok_or(DashboardError::UnknownJob(id))
    }
}

/// Card shown on the jobs listing.
#[derive(Debug, Clone, Serialize)]
pub struct JobCardView {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub applications: usize,
}

impl JobCardView {
    fn from_job(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            applications: job.application_count(),
        }
    }
}

/// Full job description backing the "View More" dialog.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetailView {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub applications: usize,
    pub description: String,
    pub requirements: String,
}

impl JobDetailView {
    fn from_job(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            applications: job.application_count(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
        }
    }
}

/// One table row in the candidate dialog. Scores are hidden before the
/// processing step has run.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRowView {
    pub name: String,
    pub email: String,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<&'static str>,
}

impl CandidateRowView {
    fn unscored(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            experience: candidate.experience.clone(),
            score: None,
            band: None,
        }
    }

    fn scored(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            experience: candidate.experience.clone(),
            score: Some(candidate.score),
            band: Some(ScoreBand::for_score(candidate.score).label()),
        }
    }
}

/// The candidate dialog, rendered for whichever step the flow is at.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum CandidateFlowView {
    Initial {
        job_title: String,
        rows: Vec<CandidateRowView>,
    },
    Loading {
        headline: &'static str,
        detail: &'static str,
    },
    Results {
        job_title: String,
        tab: CandidateTab,
        rows: Vec<CandidateRowView>,
    },
}
