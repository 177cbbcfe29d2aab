use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for posted internship positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub u32);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an applicant, unique within its job's candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub u32);

/// An applicant record associated with a job. Only `score` is ever read
/// numerically; every other field is an opaque string for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub score: u8,
    /// Inert demographic and academic attributes. Display-only; no
    /// computation reads them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic: Option<AcademicProfile>,
}

/// Extended applicant attributes carried for display. Exam scores stay
/// strings because the source forms never validated them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub exam_scores: Vec<ExamScore>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub certifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamScore {
    pub exam: String,
    pub score: String,
}

/// A posted position with descriptive fields and its candidate list. The
/// candidate collection is fixed once the catalog is built; no create,
/// update, or delete operation exists anywhere in the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    /// Unvalidated display string; placeholders are allowed.
    pub salary: String,
    pub candidates: Vec<Candidate>,
}

impl Job {
    pub fn application_count(&self) -> usize {
        self.candidates.len()
    }
}

/// The static in-memory job listing backing the dashboard. Constructed once
/// at startup and never mutated.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// The seeded job listing shown on the admin dashboard.
    pub fn standard() -> Self {
        Self::new(standard_jobs())
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn find(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

fn standard_jobs() -> Vec<Job> {
    vec![
        Job {
            id: JobId(1),
            title: "AI Research Intern".to_string(),
            company: "Ministry of Electronics & IT".to_string(),
            location: "New Delhi".to_string(),
            description: "Join our AI research team to work on cutting-edge machine learning \
                          projects that will shape the future of government digital services."
                .to_string(),
            requirements: "Bachelor's in Computer Science, Python programming, Machine Learning \
                           fundamentals"
                .to_string(),
            salary: "₹25,000/month".to_string(),
            candidates: vec![
                Candidate {
                    id: CandidateId(1),
                    name: "Rahul Sharma".to_string(),
                    email: "rahul@example.com".to_string(),
                    experience: "2 years".to_string(),
                    status: Some("Applied".to_string()),
                    score: 85,
                    academic: Some(AcademicProfile {
                        category: Some("General".to_string()),
                        exam_scores: vec![ExamScore {
                            exam: "GATE".to_string(),
                            score: "642".to_string(),
                        }],
                        skills: vec!["Python".to_string(), "TensorFlow".to_string()],
                        certifications: vec!["NPTEL Deep Learning".to_string()],
                        stream: Some("Engineering".to_string()),
                        course: Some("B.Tech Computer Science".to_string()),
                    }),
                },
                Candidate {
                    id: CandidateId(2),
                    name: "Priya Singh".to_string(),
                    email: "priya@example.com".to_string(),
                    experience: "1 year".to_string(),
                    status: Some("Reviewed".to_string()),
                    score: 92,
                    academic: Some(AcademicProfile {
                        category: Some("OBC".to_string()),
                        skills: vec!["Python".to_string(), "NLP".to_string()],
                        course: Some("M.Sc Data Science".to_string()),
                        ..AcademicProfile::default()
                    }),
                },
                Candidate {
                    id: CandidateId(3),
                    name: "Arjun Patel".to_string(),
                    email: "arjun@example.com".to_string(),
                    experience: "3 years".to_string(),
                    status: Some("Applied".to_string()),
                    score: 78,
                    academic: None,
                },
                Candidate {
                    id: CandidateId(4),
                    name: "Sneha Kumar".to_string(),
                    email: "sneha@example.com".to_string(),
                    experience: "1.5 years".to_string(),
                    status: Some("Applied".to_string()),
                    score: 88,
                    academic: None,
                },
                Candidate {
                    id: CandidateId(5),
                    name: "Vikash Das".to_string(),
                    email: "vikash@example.com".to_string(),
                    experience: "2.5 years".to_string(),
                    status: Some("Reviewed".to_string()),
                    score: 90,
                    academic: None,
                },
            ],
        },
        Job {
            id: JobId(2),
            title: "Corporate Governance Intern".to_string(),
            company: "Ministry of Corporate Affairs".to_string(),
            location: "Mumbai".to_string(),
            description: "Support the policy team analysing corporate filings and drafting \
                          governance guidance notes."
                .to_string(),
            requirements: "Bachelor's in Commerce or Law, strong writing skills".to_string(),
            salary: "₹20,000/month".to_string(),
            candidates: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_seeds_dashboard_data() {
        let catalog = JobCatalog::standard();
        let job = catalog.find(JobId(1)).expect("seeded job present");
        assert_eq!(job.title, "AI Research Intern");
        assert_eq!(job.application_count(), 5);
        let scores: Vec<u8> = job.candidates.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![85, 92, 78, 88, 90]);
    }

    #[test]
    fn find_returns_none_for_unknown_job() {
        let catalog = JobCatalog::standard();
        assert!(catalog.find(JobId(99)).is_none());
    }

    #[test]
    fn jobs_without_applicants_report_zero_applications() {
        let catalog = JobCatalog::standard();
        let job = catalog.find(JobId(2)).expect("second seeded job");
        assert_eq!(job.application_count(), 0);
    }
}
