use anyhow::ensure;
use heatmapcore::prelude::MAX_YEAR_SPAN;
use heatmapcore::DatasetRecord;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters for a synthetic monthly-variance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub start_year: i32,
    pub end_year: i32,
    pub seed: u64,
    /// Warming added per hundred years, in ℃.
    pub trend_per_century: f64,
    pub seasonal_amplitude: f64,
    pub noise: f64,
    pub description: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_year: 1753,
            end_year: 2015,
            seed: 0,
            trend_per_century: 0.6,
            seasonal_amplitude: 0.25,
            noise: 0.8,
            description: None,
        }
    }
}

/// Twelve records per year, variances rounded to three decimals like the
/// upstream feed.
pub fn build_dataset(config: &GeneratorConfig) -> anyhow::Result<Vec<DatasetRecord>> {
    ensure!(
        config.start_year <= config.end_year,
        "start year {} is after end year {}",
        config.start_year,
        config.end_year
    );
    ensure!(
        config.noise.is_finite() && config.noise >= 0.0,
        "noise must be a non-negative number"
    );

    let years = i64::from(config.end_year) - i64::from(config.start_year) + 1;
    ensure!(
        years <= MAX_YEAR_SPAN,
        "{} years requested, at most {} can be charted",
        years,
        MAX_YEAR_SPAN
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(years as usize * 12);
    let midpoint = (years - 1) as f64 / 2.0;

    for year in config.start_year..=config.end_year {
        let elapsed = (i64::from(year) - i64::from(config.start_year)) as f64;
        let trend = (elapsed - midpoint) * config.trend_per_century / 100.0;
        for month in 1..=12u32 {
            let phase = f64::from(month - 1) / 12.0 * 2.0 * PI;
            let seasonal = phase.cos() * config.seasonal_amplitude;
            let jitter = if config.noise > 0.0 {
                rng.gen_range(-config.noise..config.noise)
            } else {
                0.0
            };
            let variance = ((trend + seasonal + jitter) * 1000.0).round() / 1000.0;
            records.push(DatasetRecord::new(year, month, variance));
        }
    }

    Ok(records)
}
