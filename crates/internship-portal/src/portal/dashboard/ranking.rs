use crate::portal::catalog::Candidate;

/// Number of candidates the shortlist keeps.
pub const SHORTLIST_SIZE: usize = 3;

/// Returns a new list of all candidates ordered by descending score. The
/// input is never mutated. The sort is stable, so candidates with equal
/// scores keep their original relative order.
pub fn ranked(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted
}

/// The top candidates by descending score. Fewer than [`SHORTLIST_SIZE`]
/// candidates returns all of them; an empty input returns an empty list.
pub fn shortlist(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut sorted = ranked(candidates);
    sorted.truncate(SHORTLIST_SIZE);
    sorted
}

/// Display band for a score badge, backing the green/yellow/red styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Promising,
    Developing,
}

impl ScoreBand {
    pub const fn for_score(score: u8) -> Self {
        if score >= 90 {
            Self::Strong
        } else if score >= 80 {
            Self::Promising
        } else {
            Self::Developing
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Promising => "promising",
            Self::Developing => "developing",
        }
    }
}
