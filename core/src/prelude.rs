use serde::{Deserialize, Serialize};

/// Baseline temperature (℃) of the reference dataset.
pub const DEFAULT_BASE_TEMPERATURE: f64 = 8.66;

/// Widest year range, in bands, a single chart will lay out.
pub const MAX_YEAR_SPAN: i64 = 10_000;

/// Chart geometry and baseline shared by the scale builder and layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub base_temperature: f64,
    pub year_tick_interval: i32,
    pub legend: LegendConfig,
}

/// Placement of the legend strip below the x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub width: f64,
    pub height: f64,
    pub offset_y: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            padding: 100.0,
            base_temperature: DEFAULT_BASE_TEMPERATURE,
            year_tick_interval: 10,
            legend: LegendConfig::default(),
        }
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 30.0,
            offset_y: 40.0,
        }
    }
}

impl ChartConfig {
    /// Horizontal pixel range available to the year bands.
    pub fn x_range(&self) -> (f64, f64) {
        (self.padding, self.width - self.padding)
    }

    /// Vertical pixel range available to the month bands.
    pub fn y_range(&self) -> (f64, f64) {
        (self.padding, self.height - self.padding)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let dims = [
            self.width,
            self.height,
            self.padding,
            self.base_temperature,
            self.legend.width,
            self.legend.height,
        ];
        if dims.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidConfig(
                "dimensions must be finite".into(),
            ));
        }
        if self.padding < 0.0 {
            return Err(ChartError::InvalidConfig("padding must not be negative".into()));
        }
        if self.width - 2.0 * self.padding <= 0.0 || self.height - 2.0 * self.padding <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "padding {} leaves no drawable area in {}x{}",
                self.padding, self.width, self.height
            )));
        }
        if self.legend.width <= 0.0 || self.legend.height <= 0.0 {
            return Err(ChartError::InvalidConfig("legend must have a positive size".into()));
        }
        if self.year_tick_interval <= 0 {
            return Err(ChartError::InvalidConfig(
                "year tick interval must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Failure reported by the external data source.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("io failure: {0}")]
    Io(String),
}

/// Common error type for chart construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("dataset fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("dataset contains no records")]
    EmptyDataset,
    #[error("record {index} rejected: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("years {first}..={last} exceed the {limit}-year chart limit", limit = MAX_YEAR_SPAN)]
    YearSpanTooWide { first: i32, last: i32 },
    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
