use serde::Serialize;

/// A single point in a chart series. Frontends feed these straight into
/// their line/bar/pie renderers.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: u32,
}

/// The static chart series shown on the dashboard landing view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCharts {
    pub jobs_over_time: Vec<ChartPoint>,
    pub applications_per_week: Vec<ChartPoint>,
    pub job_status: Vec<ChartPoint>,
}

impl DashboardCharts {
    /// The fixed series shown on the dashboard overview.
    pub fn standard() -> Self {
        Self {
            jobs_over_time: vec![
                ChartPoint { label: "Jan", value: 15 },
                ChartPoint { label: "Feb", value: 22 },
                ChartPoint { label: "Mar", value: 18 },
                ChartPoint { label: "Apr", value: 28 },
                ChartPoint { label: "May", value: 35 },
                ChartPoint { label: "Jun", value: 42 },
            ],
            applications_per_week: vec![
                ChartPoint { label: "Week 1", value: 120 },
                ChartPoint { label: "Week 2", value: 98 },
                ChartPoint { label: "Week 3", value: 156 },
                ChartPoint { label: "Week 4", value: 134 },
            ],
            job_status: vec![
                ChartPoint { label: "Active", value: 65 },
                ChartPoint { label: "Closed", value: 35 },
            ],
        }
    }
}
