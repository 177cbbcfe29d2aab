use crate::infra::build_controller;
use clap::Args;
use internship_portal::config::ScoringConfig;
use internship_portal::error::AppError;
use internship_portal::portal::catalog::JobId;
use internship_portal::portal::dashboard::{
    report, CandidateFlowView, CandidateRowView, CandidateTab, SHORTLIST_SIZE,
};
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Job to walk through (defaults to the first seeded job)
    #[arg(long)]
    pub(crate) job: Option<u32>,
    /// Simulated scoring delay in milliseconds (defaults to no delay)
    #[arg(long)]
    pub(crate) delay_ms: Option<u64>,
    /// Skip the shortlist CSV at the end of the demo output
    #[arg(long)]
    pub(crate) skip_report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ShortlistArgs {
    /// Job to shortlist candidates for
    #[arg(long, default_value_t = 1)]
    pub(crate) job: u32,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        job,
        delay_ms,
        skip_report,
    } = args;

    let scoring = ScoringConfig {
        processing_delay: Duration::from_millis(delay_ms.unwrap_or(0)),
    };
    let controller = build_controller(&scoring);
    let job_id = JobId(job.unwrap_or(1));

    println!("PM Internship Programme portal demo");

    println!("\nPosted internships:");
    for card in controller.job_cards() {
        println!(
            "- [{}] {} | {} | {} | {} applications",
            card.id.0, card.title, card.company, card.location, card.applications
        );
    }

    let profile = controller.profile();
    println!(
        "\nSigned-in administrator: {} <{}> ({}, {})",
        profile.name, profile.email, profile.role, profile.department
    );

    let view = controller.open_candidate_dialog(job_id)?;
    if let CandidateFlowView::Initial { job_title, rows } = &view {
        println!("\nApplicants for {job_title} (not yet scored):");
        for row in rows {
            println!("- {} <{}> | {}", row.name, row.email, row.experience);
        }
    }

    controller.submit_candidates()?;
    if let CandidateFlowView::Loading { headline, detail } = controller.candidate_flow_view()? {
        println!("\n{headline}");
        println!("{detail}");
    }
    controller.process_candidates().await?;

    println!("\nScored candidates:");
    render_rows(&controller.results_rows()?);

    controller.select_tab(CandidateTab::Shortlisted)?;
    println!("\nShortlist (top {SHORTLIST_SIZE}):");
    render_rows(&controller.shortlist_rows()?);

    if skip_report {
        return Ok(());
    }

    let csv = report::candidate_table_csv(&controller.shortlist_rows()?)?;
    println!("\nShortlist CSV:\n{csv}");
    Ok(())
}

pub(crate) async fn run_shortlist(args: ShortlistArgs) -> Result<(), AppError> {
    let controller = build_controller(&ScoringConfig {
        processing_delay: Duration::ZERO,
    });

    controller.open_candidate_dialog(JobId(args.job))?;
    controller.submit_candidates()?;
    controller.process_candidates().await?;

    let csv = report::candidate_table_csv(&controller.shortlist_rows()?)?;
    print!("{csv}");
    Ok(())
}

fn render_rows(rows: &[CandidateRowView]) {
    for row in rows {
        let score = row
            .score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "-".to_string());
        let band = row.band.unwrap_or("unscored");
        println!("- {} | {} | score {} ({})", row.name, row.experience, score, band);
    }
}
