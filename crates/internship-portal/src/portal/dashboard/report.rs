use super::CandidateRowView;

/// Failure while rendering a downloadable report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("report buffer error: {0}")]
    Buffer(String),
}

/// Render a candidate table as CSV, the payload behind the dashboard's
/// "Download Report" and "Download Shortlist" buttons. Rows without a score
/// (the pre-processing table) leave the score column empty.
pub fn candidate_table_csv(rows: &[CandidateRowView]) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Name", "Email", "Experience", "Score"])?;

    for row in rows {
        let score = row.score.map(|s| s.to_string()).unwrap_or_default();
        writer.write_record([&row.name, &row.email, &row.experience, &score])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ReportError::Buffer(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ReportError::Buffer(err.to_string()))
}
