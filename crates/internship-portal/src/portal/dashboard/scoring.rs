use crate::config::ScoringConfig;
use crate::portal::catalog::{Candidate, Job};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub type ScoringFuture = Pin<Box<dyn Future<Output = Result<Vec<Candidate>, ScoringError>> + Send>>;

/// Port standing in for the backend that scores a job's applicants. The
/// dashboard controller only depends on this trait, so a real scoring
/// service can replace the simulation without touching the state machine.
pub trait CandidateScoringService: Send + Sync {
    fn score_candidates(&self, job: &Job) -> ScoringFuture;
}

/// Failure surface for substituted backends. The simulated service never
/// produces one.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("scoring backend unavailable: {0}")]
    Unavailable(String),
}

/// Stand-in for a server computing candidate scores: waits the configured
/// delay, then returns the candidates with the scores they already carry.
/// The wait is wall-clock and unconditional; nothing cancels it.
#[derive(Debug, Clone)]
pub struct SimulatedScoringService {
    delay: Duration,
}

impl SimulatedScoringService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.processing_delay)
    }

    /// Zero-delay variant for demos and tests that drive the pipeline to
    /// completion directly.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for SimulatedScoringService {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl CandidateScoringService for SimulatedScoringService {
    fn score_candidates(&self, job: &Job) -> ScoringFuture {
        let candidates = job.candidates.clone();
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(candidates)
        })
    }
}
