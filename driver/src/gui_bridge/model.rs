use heatmapcore::ChartDescriptor;
use serde::{Deserialize, Serialize};

/// What the bridge serves to GUI clients.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartModel {
    pub chart: Option<ChartDescriptor>,
    pub status: String,
}

impl ChartModel {
    pub fn ready(chart: ChartDescriptor) -> Self {
        let status = format!("{} cells ready", chart.cells.len());
        Self {
            chart: Some(chart),
            status,
        }
    }
}
