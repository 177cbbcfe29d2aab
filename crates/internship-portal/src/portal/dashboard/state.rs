use crate::portal::catalog::JobId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level section of the admin dashboard. Exactly one is visible at a
/// time; there is no history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Companies,
    Jobs,
}

impl Section {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Companies => "Companies",
            Self::Jobs => "Jobs",
        }
    }
}

/// The dialog currently open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    EditProfile,
    JobDetail,
    CandidateList,
}

/// Step indicator for the candidate dialog flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStep {
    Initial,
    Loading,
    Results,
}

impl CandidateStep {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Loading => "loading",
            Self::Results => "results",
        }
    }
}

impl fmt::Display for CandidateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tab selector shown once scoring results are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateTab {
    All,
    Shortlisted,
}

impl CandidateTab {
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Candidates",
            Self::Shortlisted => "Shortlisted",
        }
    }
}

/// The whole in-memory view state of the admin session, serializable so the
/// frontend can mirror it verbatim. All mutation goes through the discrete
/// action methods below; nothing else touches the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub section: Section,
    pub open_dialog: Option<DialogKind>,
    pub step: CandidateStep,
    pub tab: CandidateTab,
    pub selected_job: Option<JobId>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            section: Section::Dashboard,
            open_dialog: None,
            step: CandidateStep::Initial,
            tab: CandidateTab::All,
            selected_job: None,
        }
    }
}

impl DashboardState {
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn open_profile_editor(&mut self) {
        self.open_dialog = Some(DialogKind::EditProfile);
    }

    pub fn open_job_detail(&mut self, job: JobId) {
        self.selected_job = Some(job);
        self.open_dialog = Some(DialogKind::JobDetail);
    }

    /// Opens the candidate dialog for `job` and resets the flow, so every
    /// open starts fresh regardless of where a previous cycle ended.
    pub fn open_candidate_dialog(&mut self, job: JobId) {
        self.selected_job = Some(job);
        self.open_dialog = Some(DialogKind::CandidateList);
        self.step = CandidateStep::Initial;
        self.tab = CandidateTab::All;
    }

    /// Closes whichever dialog is open. The selected job is kept until a new
    /// selection overwrites it.
    pub fn close_dialog(&mut self) {
        self.open_dialog = None;
    }

    /// `initial -> loading`, synchronously.
    pub fn begin_processing(&mut self) -> Result<(), ViewStateError> {
        self.require_candidate_dialog()?;
        if self.step != CandidateStep::Initial {
            return Err(ViewStateError::WrongStep {
                expected: CandidateStep::Initial,
                actual: self.step,
            });
        }
        self.step = CandidateStep::Loading;
        Ok(())
    }

    /// `loading -> results`. Fails when the dialog was closed mid-flight,
    /// which callers treat as "discard the outcome". Reopened cycles are
    /// screened by the controller's cycle stamp before this runs.
    pub fn finish_processing(&mut self) -> Result<(), ViewStateError> {
        self.require_candidate_dialog()?;
        if self.step != CandidateStep::Loading {
            return Err(ViewStateError::WrongStep {
                expected: CandidateStep::Loading,
                actual: self.step,
            });
        }
        self.step = CandidateStep::Results;
        Ok(())
    }

    /// Tabs only exist on the results screen.
    pub fn select_tab(&mut self, tab: CandidateTab) -> Result<(), ViewStateError> {
        self.require_candidate_dialog()?;
        if self.step != CandidateStep::Results {
            return Err(ViewStateError::WrongStep {
                expected: CandidateStep::Results,
                actual: self.step,
            });
        }
        self.tab = tab;
        Ok(())
    }

    fn require_candidate_dialog(&self) -> Result<(), ViewStateError> {
        if self.open_dialog == Some(DialogKind::CandidateList) {
            Ok(())
        } else {
            Err(ViewStateError::DialogNotOpen)
        }
    }
}

/// Rejected view-state transition. The frontend hides the controls that
/// would trigger these; over HTTP they surface as conflicts.
#[derive(Debug, thiserror::Error)]
pub enum ViewStateError {
    #[error("candidate dialog is not open")]
    DialogNotOpen,
    #[error("candidate flow is at '{actual}', expected '{expected}'")]
    WrongStep {
        expected: CandidateStep,
        actual: CandidateStep,
    },
}
