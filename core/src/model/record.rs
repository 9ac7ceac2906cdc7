use crate::prelude::{ChartError, ChartResult, FetchError};
use serde::{Deserialize, Serialize};

/// One monthly observation of the global temperature anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    pub variance: f64,
}

impl DatasetRecord {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    pub fn absolute_temp(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }

    /// Zero-based month index used by cell metadata.
    pub fn month_index0(&self) -> u32 {
        self.month.saturating_sub(1)
    }
}

/// Upstream JSON document; only `monthlyVariance` feeds the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    #[serde(default)]
    pub base_temperature: Option<f64>,
    pub monthly_variance: Vec<DatasetRecord>,
}

/// Decodes the upstream payload into records.
pub fn parse_payload(body: &str) -> Result<Vec<DatasetRecord>, FetchError> {
    let dataset: TemperatureDataset =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(dataset.monthly_variance)
}

/// Rejects records outside the modelled domain.
pub fn validate_records(records: &[DatasetRecord]) -> ChartResult<()> {
    if records.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    for (index, record) in records.iter().enumerate() {
        if !(1..=12).contains(&record.month) {
            return Err(ChartError::InvalidRecord {
                index,
                reason: format!("month {} outside 1..=12", record.month),
            });
        }
        if !record.variance.is_finite() {
            return Err(ChartError::InvalidRecord {
                index,
                reason: "variance is not finite".into(),
            });
        }
    }
    Ok(())
}
