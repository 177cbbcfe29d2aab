use super::common::*;
use crate::portal::catalog::JobId;
use crate::portal::dashboard::report::candidate_table_csv;
use crate::portal::dashboard::DashboardError;

#[tokio::test]
async fn shortlist_csv_contains_header_and_top_three() {
    let controller = instant_controller();
    controller
        .open_candidate_dialog(JobId(1))
        .expect("dialog opens");
    controller.submit_candidates().expect("submit accepted");
    controller
        .process_candidates()
        .await
        .expect("scoring completes");

    let rows = controller.shortlist_rows().expect("shortlist available");
    let csv = candidate_table_csv(&rows).expect("csv renders");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Name,Email,Experience,Score");
    assert!(lines[1].starts_with("Priya,") && lines[1].ends_with(",92"));
    assert!(lines[2].starts_with("Vikash,") && lines[2].ends_with(",90"));
    assert!(lines[3].starts_with("Sneha,") && lines[3].ends_with(",88"));
}

#[tokio::test]
async fn report_rows_are_unavailable_before_results() {
    let controller = instant_controller();
    controller
        .open_candidate_dialog(JobId(1))
        .expect("dialog opens");

    match controller.results_rows() {
        Err(DashboardError::ViewState(_)) => {}
        other => panic!("expected view-state error, got {other:?}"),
    }
}

#[test]
fn unscored_rows_leave_the_score_column_empty() {
    let rows = vec![crate::portal::dashboard::CandidateRowView {
        name: "Rahul Sharma".to_string(),
        email: "rahul@example.com".to_string(),
        experience: "2 years".to_string(),
        score: None,
        band: None,
    }];

    let csv = candidate_table_csv(&rows).expect("csv renders");
    assert!(csv.contains("Rahul Sharma,rahul@example.com,2 years,\n"));
}
