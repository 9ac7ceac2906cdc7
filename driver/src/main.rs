use anyhow::Context;
use clap::Parser;
use generator::synthetic::GeneratorConfig;
use gui_bridge::bridge::ChartBridge;
use log::{error, info};
use render::SvgWriter;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{DataSource, DriverConfig};
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod render;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Monthly global temperature heatmap driver")]
struct Args {
    /// Load a driver config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fetch the dataset from this URL
    #[arg(long, conflicts_with_all = ["dataset", "synthetic"])]
    url: Option<String>,
    /// Read the dataset from a local JSON file
    #[arg(long, conflicts_with = "synthetic")]
    dataset: Option<PathBuf>,
    /// Generate a seeded synthetic dataset instead of fetching
    #[arg(long, default_value_t = false)]
    synthetic: bool,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Baseline temperature added to every variance
    #[arg(long)]
    base_temperature: Option<f64>,
    /// Write the rendered chart as SVG
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Write the chart descriptors as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Keep the HTTP bridge alive for GUI clients
    #[arg(long, default_value_t = false)]
    serve: bool,
}

impl Args {
    fn driver_config(&self) -> anyhow::Result<DriverConfig> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::load(path)?,
            None => DriverConfig::default(),
        };
        let source = if let Some(url) = &self.url {
            Some(DataSource::Url { url: url.clone() })
        } else if let Some(path) = &self.dataset {
            Some(DataSource::File { path: path.clone() })
        } else if self.synthetic {
            Some(DataSource::Synthetic(GeneratorConfig {
                seed: self.seed,
                ..Default::default()
            }))
        } else {
            None
        };
        if let Some(source) = source {
            config = config.with_source(source);
        }
        if let Some(base) = self.base_temperature {
            config.chart.base_temperature = base;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.driver_config()?;

    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime for dataset fetch")?;
    let runner = Runner::new(config.clone());
    let bridge = args
        .serve
        .then(|| ChartBridge::new(Arc::new(runner.clone()), config.bind));

    let fetched = runtime.block_on(runner.acquire());
    match runner.render(fetched) {
        Ok(chart) => {
            info!(
                "chart ready: {} cells, {} year ticks, {} legend buckets",
                chart.cells.len(),
                chart.x_axis.ticks.len(),
                chart.legend.buckets.len()
            );
            if let Some(path) = &args.svg {
                SvgWriter::from_chart(&chart).write_to_file(path)?;
                info!("svg written to {}", path.display());
            }
            if let Some(path) = &args.json {
                let body = serde_json::to_string_pretty(&chart)
                    .context("serialising chart descriptors")?;
                fs::write(path, body)
                    .with_context(|| format!("writing descriptors {}", path.display()))?;
                info!("descriptors written to {}", path.display());
            }
            if let Some(bridge) = &bridge {
                bridge.publish(&chart);
            }
        }
        Err(err) => {
            error!("no chart produced: {}", err);
            if let Some(bridge) = &bridge {
                bridge.publish_status(&format!("no chart: {err}"));
            }
        }
    }

    if bridge.is_some() {
        info!("HTTP bridge on {} (Ctrl+C to stop)", config.bind);
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
