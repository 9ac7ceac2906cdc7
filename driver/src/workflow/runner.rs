use crate::generator::synthetic::build_dataset;
use crate::workflow::config::{DataSource, DriverConfig};
use crate::workflow::source::{fetch_dataset, load_dataset};
use heatmapcore::prelude::ChartResult;
use heatmapcore::{ChartDescriptor, DatasetRecord, FetchError, HeatmapEngine};
use std::sync::Arc;

/// Acquires records from the configured source and renders them.
#[derive(Clone)]
pub struct Runner {
    config: DriverConfig,
    engine: Arc<HeatmapEngine>,
}

impl Runner {
    pub fn new(config: DriverConfig) -> Self {
        let engine = Arc::new(HeatmapEngine::new(config.chart.clone()));
        Self { config, engine }
    }

    /// The only suspension point: nothing is rendered until this resolves.
    pub async fn acquire(&self) -> Result<Vec<DatasetRecord>, FetchError> {
        match &self.config.source {
            DataSource::Url { url } => fetch_dataset(url).await,
            DataSource::File { path } => load_dataset(path),
            DataSource::Synthetic(generator) => {
                build_dataset(generator).map_err(|e| FetchError::Malformed(format!("{e:#}")))
            }
        }
    }

    pub fn render(
        &self,
        fetched: Result<Vec<DatasetRecord>, FetchError>,
    ) -> ChartResult<ChartDescriptor> {
        self.engine.render_fetched(fetched)
    }

    pub fn execute(&self, records: &[DatasetRecord]) -> ChartResult<ChartDescriptor> {
        self.engine.render(records)
    }
}
