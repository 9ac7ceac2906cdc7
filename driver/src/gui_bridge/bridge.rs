use crate::generator::synthetic::{build_dataset, GeneratorConfig};
use crate::gui_bridge::model::ChartModel;
use crate::workflow::runner::Runner;
use heatmapcore::prelude::ChartResult;
use heatmapcore::telemetry::RenderMetrics;
use heatmapcore::{ChartDescriptor, DatasetRecord, FetchError};
use log::{error, info, warn};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

type SharedModel = Arc<RwLock<ChartModel>>;

/// Hosts the chart over HTTP and re-renders on ingest requests.
///
/// A failed ingest leaves the previously published chart untouched.
pub struct ChartBridge {
    state: SharedModel,
    metrics: Arc<RenderMetrics>,
}

impl ChartBridge {
    pub fn new(runner: Arc<Runner>, addr: SocketAddr) -> Self {
        let state: SharedModel = Arc::new(RwLock::new(ChartModel::default()));
        let metrics = Arc::new(RenderMetrics::new());

        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let metrics_for_filter = metrics.clone();
        let metrics_filter = warp::any().map(move || metrics_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let chart_route = warp::path("chart")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedModel| warp::reply::json(&read_model(&state)));

        let metrics_route = warp::path("metrics")
            .and(warp::get())
            .and(metrics_filter.clone())
            .map(|metrics: Arc<RenderMetrics>| {
                let (rendered, failed, cells) = metrics.snapshot();
                warp::reply::json(&json!({
                    "rendered": rendered,
                    "failed": failed,
                    "last_cell_count": cells,
                }))
            });

        let ingest_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(metrics_filter.clone())
            .and(runner_filter.clone())
            .map(
                |records: Vec<DatasetRecord>,
                 state: SharedModel,
                 metrics: Arc<RenderMetrics>,
                 runner: Arc<Runner>| {
                    apply_outcome(runner.execute(&records), &state, &metrics)
                },
            );

        let generator_route = warp::path("ingest-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(metrics_filter)
            .and(runner_filter)
            .map(
                |config: GeneratorConfig,
                 state: SharedModel,
                 metrics: Arc<RenderMetrics>,
                 runner: Arc<Runner>| {
                    if let Some(description) = config.description.as_ref() {
                        info!("[bridge] synthetic dataset: {}", description);
                    }
                    let fetched = build_dataset(&config)
                        .map_err(|e| FetchError::Malformed(format!("{e:#}")));
                    apply_outcome(runner.render(fetched), &state, &metrics)
                },
            );

        thread::spawn(move || {
            let routes = chart_route
                .or(metrics_route)
                .or(ingest_route)
                .or(generator_route);
            match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(async move {
                    info!("[bridge] serving on http://{}", addr);
                    warp::serve(routes).run(addr).await;
                }),
                Err(err) => error!("[bridge] failed to build runtime: {}", err),
            }
        });

        Self { state, metrics }
    }

    pub fn publish(&self, chart: &ChartDescriptor) {
        self.metrics.record_render(chart.cells.len());
        let model = ChartModel::ready(chart.clone());
        info!("[bridge] {}", model.status);
        write_model(&self.state, model);
    }

    pub fn publish_status(&self, message: &str) {
        info!("[bridge] {}", message);
        let mut guard = self.state.write().unwrap_or_else(|p| p.into_inner());
        guard.status = message.to_string();
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ChartModel {
        read_model(&self.state)
    }
}

fn read_model(state: &SharedModel) -> ChartModel {
    state.read().unwrap_or_else(|p| p.into_inner()).clone()
}

fn write_model(state: &SharedModel, model: ChartModel) {
    *state.write().unwrap_or_else(|p| p.into_inner()) = model;
}

fn apply_outcome(
    outcome: ChartResult<ChartDescriptor>,
    state: &SharedModel,
    metrics: &RenderMetrics,
) -> warp::reply::WithStatus<warp::reply::Json> {
    match outcome {
        Ok(chart) => {
            let cells = chart.cells.len();
            metrics.record_render(cells);
            write_model(state, ChartModel::ready(chart));
            warp::reply::with_status(
                warp::reply::json(&json!({"status": "ok", "cells": cells})),
                StatusCode::OK,
            )
        }
        Err(err) => {
            metrics.record_failure();
            warn!("[bridge] ingest rejected: {}", err);
            warp::reply::with_status(
                warp::reply::json(&json!({"status": "error", "message": err.to_string()})),
                StatusCode::UNPROCESSABLE_ENTITY,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::DriverConfig;
    use heatmapcore::ChartError;

    fn bridge() -> (ChartBridge, Arc<Runner>) {
        let runner = Arc::new(Runner::new(DriverConfig::default()));
        let bridge = ChartBridge::new(runner.clone(), SocketAddr::from(([127, 0, 0, 1], 0)));
        (bridge, runner)
    }

    #[test]
    fn publish_updates_state() {
        let (bridge, runner) = bridge();
        let chart = runner
            .execute(&[DatasetRecord::new(1990, 4, 0.3)])
            .unwrap();
        bridge.publish(&chart);
        let snapshot = bridge.snapshot();
        assert_eq!(snapshot.chart.map(|c| c.cells.len()), Some(1));
        assert_eq!(snapshot.status, "1 cells ready");
        assert_eq!(bridge.metrics.snapshot(), (1, 0, 1));
    }

    #[test]
    fn failed_ingest_keeps_previous_chart() {
        let (bridge, runner) = bridge();
        let chart = runner
            .execute(&[DatasetRecord::new(1990, 4, 0.3)])
            .unwrap();
        bridge.publish(&chart);

        let reply = apply_outcome(Err(ChartError::EmptyDataset), &bridge.state, &bridge.metrics);
        let response = warp::Reply::into_response(reply);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(bridge.snapshot().chart, Some(chart));
        assert_eq!(bridge.metrics.snapshot().1, 1);
    }

    #[test]
    fn status_message_is_recorded() {
        let (bridge, _) = bridge();
        bridge.publish_status("waiting for dataset");
        assert_eq!(bridge.snapshot().status, "waiting for dataset");
        assert!(bridge.snapshot().chart.is_none());
    }
}
