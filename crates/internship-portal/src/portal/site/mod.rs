use chrono::NaiveDate;
use serde::Serialize;

/// Structured content for the public marketing page. The frontend renders
/// these sections verbatim; the service owns the copy so every channel shows
/// the same programme details.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub features: Vec<FeatureHighlight>,
    pub about: AboutContent,
    pub eligibility: EligibilitySection,
    pub application_steps: Vec<ApplicationStep>,
    pub important_dates: Vec<ProgrammeDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutContent {
    pub heading: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub quick_stats: Vec<QuickStat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilitySection {
    pub criteria: Vec<EligibilityCriterion>,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityCriterion {
    pub criteria: &'static str,
    pub requirement: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgrammeDate {
    pub date: NaiveDate,
    pub label: &'static str,
}

impl ProgrammeDate {
    /// The format the landing page prints, e.g. "15 Jan 2025".
    pub fn display(&self) -> String {
        self.date.format("%-d %b %Y").to_string()
    }
}

fn programme_date(year: i32, month: u32, day: u32, label: &'static str) -> ProgrammeDate {
    ProgrammeDate {
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid programme date"),
        label,
    }
}

impl SiteContent {
    /// The published copy of the PM Internship Programme landing page.
    pub fn standard() -> Self {
        Self {
            hero: HeroContent {
                title: "PM Internship Programme",
                tagline: "Empowering young minds through hands-on experience in governance and \
                          public policy implementation",
                primary_action: "Apply Now",
                secondary_action: "Learn More",
            },
            features: vec![
                FeatureHighlight {
                    title: "12 Month Duration",
                    description: "Comprehensive internship program spanning a full year for \
                                  in-depth learning",
                },
                FeatureHighlight {
                    title: "Industry Mentorship",
                    description: "Direct guidance from experienced professionals and government \
                                  officials",
                },
                FeatureHighlight {
                    title: "Practical Training",
                    description: "Hands-on experience in real government projects and policy \
                                  implementation",
                },
                FeatureHighlight {
                    title: "Certificate & Stipend",
                    description: "Official certification and monthly stipend for dedicated \
                                  participants",
                },
            ],
            about: AboutContent {
                heading: "About the Programme",
                paragraphs: vec![
                    "The PM Internship Programme is a flagship initiative by the Ministry of \
                     Corporate Affairs, designed to provide young graduates with practical \
                     exposure to government functioning and policy implementation.",
                    "Through this comprehensive 12-month programme, interns work closely with \
                     government departments, gaining invaluable insights into public \
                     administration, corporate governance, and policy formulation processes.",
                    "Our interns contribute to real projects that impact millions of citizens, \
                     making this programme both meaningful and career-defining for aspiring \
                     public servants and policy makers.",
                ],
                quick_stats: vec![
                    QuickStat {
                        label: "Monthly Stipend",
                        value: "₹25,000",
                    },
                    QuickStat {
                        label: "Application Period",
                        value: "Jan - Mar 2025",
                    },
                    QuickStat {
                        label: "Selection Process",
                        value: "Merit Based",
                    },
                ],
            },
            eligibility: EligibilitySection {
                criteria: vec![
                    EligibilityCriterion {
                        criteria: "Education",
                        requirement: "Bachelor's degree in any discipline from recognized \
                                      university",
                    },
                    EligibilityCriterion {
                        criteria: "Age Limit",
                        requirement: "21-28 years (relaxation as per government norms)",
                    },
                    EligibilityCriterion {
                        criteria: "Selection",
                        requirement: "Merit-based selection through online application and \
                                      assessment",
                    },
                    EligibilityCriterion {
                        criteria: "Commitment",
                        requirement: "Full-time availability for 12-month duration",
                    },
                ],
                note: "Candidates from SC/ST/OBC categories may be eligible for age relaxation \
                       as per government guidelines. Reserved category certificates must be \
                       submitted during application.",
            },
            application_steps: vec![
                ApplicationStep {
                    step: 1,
                    title: "Online Registration",
                    description: "Fill out the comprehensive application form with all required \
                                  details",
                },
                ApplicationStep {
                    step: 2,
                    title: "Document Upload",
                    description: "Submit educational certificates, ID proof, and other necessary \
                                  documents",
                },
                ApplicationStep {
                    step: 3,
                    title: "Assessment Test",
                    description: "Appear for online assessment test covering general awareness \
                                  and aptitude",
                },
                ApplicationStep {
                    step: 4,
                    title: "Final Selection",
                    description: "Merit list publication and internship allocation based on \
                                  performance",
                },
            ],
            important_dates: vec![
                programme_date(2025, 1, 15, "Application Opens"),
                programme_date(2025, 3, 31, "Application Deadline"),
                programme_date(2025, 4, 30, "Results Announcement"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_content_covers_every_section() {
        let content = SiteContent::standard();
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.eligibility.criteria.len(), 4);
        assert_eq!(content.application_steps.len(), 4);
        assert_eq!(content.important_dates.len(), 3);
        assert_eq!(content.about.paragraphs.len(), 3);
    }

    #[test]
    fn programme_dates_render_in_landing_page_format() {
        let content = SiteContent::standard();
        let rendered: Vec<String> = content
            .important_dates
            .iter()
            .map(ProgrammeDate::display)
            .collect();
        assert_eq!(rendered, vec!["15 Jan 2025", "31 Mar 2025", "30 Apr 2025"]);
    }

    #[test]
    fn application_steps_are_ordered() {
        let content = SiteContent::standard();
        let steps: Vec<u8> = content.application_steps.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4]);
    }
}
