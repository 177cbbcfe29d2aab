use std::sync::Arc;

use crate::portal::catalog::{Candidate, CandidateId, Job, JobCatalog, JobId};
use crate::portal::dashboard::scoring::{
    CandidateScoringService, ScoringError, ScoringFuture, SimulatedScoringService,
};
use crate::portal::dashboard::DashboardController;

pub(super) fn candidate(id: u32, name: &str, score: u8) -> Candidate {
    Candidate {
        id: CandidateId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_ascii_lowercase()),
        experience: "2 years".to_string(),
        status: Some("Applied".to_string()),
        score,
        academic: None,
    }
}

/// The seeded score spread: 85, 92, 78, 88, 90.
pub(super) fn sample_candidates() -> Vec<Candidate> {
    vec![
        candidate(1, "Rahul", 85),
        candidate(2, "Priya", 92),
        candidate(3, "Arjun", 78),
        candidate(4, "Sneha", 88),
        candidate(5, "Vikash", 90),
    ]
}

pub(super) fn sample_job() -> Job {
    Job {
        id: JobId(1),
        title: "AI Research Intern".to_string(),
        company: "Ministry of Electronics & IT".to_string(),
        location: "New Delhi".to_string(),
        description: "Machine learning projects for digital services.".to_string(),
        requirements: "Python, ML fundamentals".to_string(),
        salary: "₹25,000/month".to_string(),
        candidates: sample_candidates(),
    }
}

pub(super) fn empty_job() -> Job {
    Job {
        id: JobId(2),
        title: "Corporate Governance Intern".to_string(),
        company: "Ministry of Corporate Affairs".to_string(),
        location: "Mumbai".to_string(),
        description: "Policy support.".to_string(),
        requirements: "Commerce or Law".to_string(),
        salary: "₹20,000/month".to_string(),
        candidates: Vec::new(),
    }
}

pub(super) fn catalog() -> Arc<JobCatalog> {
    Arc::new(JobCatalog::new(vec![sample_job(), empty_job()]))
}

pub(super) fn instant_controller() -> Arc<DashboardController<SimulatedScoringService>> {
    Arc::new(DashboardController::new(
        catalog(),
        Arc::new(SimulatedScoringService::instant()),
    ))
}

/// Backend that always fails, for exercising the port's error path.
pub(super) struct FailingScoringService;

impl CandidateScoringService for FailingScoringService {
    fn score_candidates(&self, _job: &Job) -> ScoringFuture {
        Box::pin(async {
            Err(ScoringError::Unavailable(
                "scoring cluster offline".to_string(),
            ))
        })
    }
}
