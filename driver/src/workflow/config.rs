use crate::generator::synthetic::GeneratorConfig;
use anyhow::Context;
use heatmapcore::ChartConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Where the monthly variance records come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    Url { url: String },
    File { path: PathBuf },
    Synthetic(GeneratorConfig),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url {
            url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub source: DataSource,
    pub chart: ChartConfig,
    pub bind: SocketAddr,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            chart: ChartConfig::default(),
            bind: SocketAddr::from(([127, 0, 0, 1], 9000)),
        }
    }
}

impl DriverConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading driver config {}", path_ref.display()))?;
        let config: DriverConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing driver config {}", path_ref.display()))?;
        config
            .chart
            .validate()
            .with_context(|| format!("validating chart section of {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }
}
