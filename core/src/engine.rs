use crate::layout::layout_cells;
use crate::legend::build_legend;
use crate::model::{validate_records, ChartDescriptor, DatasetRecord};
use crate::prelude::{ChartConfig, ChartResult, FetchError};
use crate::scale::ScaleSet;
use crate::telemetry::log::RenderLog;
use crate::ticks::{x_axis, y_axis};
use crate::tooltip::{format_tooltip, TooltipContent};

/// Turns monthly variance records into chart descriptors.
///
/// Every call derives scales afresh from its input; the engine holds no
/// per-dataset state, so rendering is idempotent.
pub struct HeatmapEngine {
    config: ChartConfig,
    logger: RenderLog,
}

impl HeatmapEngine {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            logger: RenderLog::new("heatmap"),
        }
    }

    /// Validated scales for `records`.
    pub fn scales(&self, records: &[DatasetRecord]) -> ChartResult<ScaleSet> {
        self.config.validate()?;
        validate_records(records)?;
        ScaleSet::build(records, &self.config)
    }

    /// Either a complete descriptor set or an error; never a partial chart.
    pub fn render(&self, records: &[DatasetRecord]) -> ChartResult<ChartDescriptor> {
        let scales = self.scales(records)?;
        let cells = layout_cells(records, &scales)?;
        let chart = ChartDescriptor {
            width: self.config.width,
            height: self.config.height,
            base_temperature: self.config.base_temperature,
            cells,
            x_axis: x_axis(&scales, &self.config),
            y_axis: y_axis(&scales, &self.config),
            legend: build_legend(&scales, &self.config),
        };

        self.logger.record(&format!(
            "rendered {} cells over {}..={}",
            chart.cells.len(),
            scales.year_domain.0,
            scales.year_domain.1
        ));
        Ok(chart)
    }

    /// Renders the outcome of a dataset fetch; a failed fetch renders nothing.
    pub fn render_fetched(
        &self,
        fetched: Result<Vec<DatasetRecord>, FetchError>,
    ) -> ChartResult<ChartDescriptor> {
        let records = fetched.map_err(|err| {
            self.logger.trace(&format!("fetch failed, nothing rendered: {err}"));
            err
        })?;
        self.render(&records)
    }

    pub fn tooltip_for(&self, record: &DatasetRecord) -> TooltipContent {
        format_tooltip(record, self.config.base_temperature)
    }
}

impl Default for HeatmapEngine {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legend::LEGEND_BUCKETS;
    use crate::prelude::ChartError;

    fn sample() -> Vec<DatasetRecord> {
        vec![
            DatasetRecord::new(1900, 1, -0.5),
            DatasetRecord::new(2000, 6, 1.2),
        ]
    }

    #[test]
    fn render_produces_full_descriptor_set() {
        let chart = HeatmapEngine::default().render(&sample()).unwrap();
        assert_eq!(chart.cells.len(), 2);
        assert_eq!(chart.x_axis.tick_labels().len(), 11);
        assert_eq!(chart.y_axis.ticks.len(), 12);
        assert_eq!(chart.legend.buckets.len(), LEGEND_BUCKETS);
        assert_eq!(chart.cells[0].metadata.month_index0, 0);
    }

    #[test]
    fn empty_dataset_produces_nothing() {
        assert_eq!(
            HeatmapEngine::default().render(&[]),
            Err(ChartError::EmptyDataset)
        );
    }

    #[test]
    fn fetch_failure_is_surfaced() {
        let engine = HeatmapEngine::default();
        let err = engine
            .render_fetched(Err(FetchError::Transport("connection refused".into())))
            .unwrap_err();
        assert_eq!(
            err,
            ChartError::Fetch(FetchError::Transport("connection refused".into()))
        );
    }

    #[test]
    fn invalid_record_aborts_whole_render() {
        let mut records = sample();
        records.push(DatasetRecord::new(1950, 0, 0.0));
        assert!(matches!(
            HeatmapEngine::default().render(&records),
            Err(ChartError::InvalidRecord { index: 2, .. })
        ));
    }

    #[test]
    fn billion_year_spread_is_rejected() {
        let records = [
            DatasetRecord::new(-2_000_000_000, 1, 0.1),
            DatasetRecord::new(2_000_000_000, 12, -0.1),
        ];
        assert!(matches!(
            HeatmapEngine::default().render(&records),
            Err(ChartError::YearSpanTooWide { .. })
        ));
    }

    #[test]
    fn single_record_renders_trivial_chart() {
        let chart = HeatmapEngine::default()
            .render(&[DatasetRecord::new(2020, 3, 0.0)])
            .unwrap();
        assert_eq!(chart.cells.len(), 1);
        assert_eq!(chart.cells[0].width, 1000.0);
        assert!(chart.x_axis.ticks.iter().all(|t| t.label == "2020"));
        assert_eq!(chart.legend.axis.tick_labels(), vec!["8.7"]);
    }

    #[test]
    fn permuted_input_yields_same_cells() {
        let engine = HeatmapEngine::default();
        let forward = engine.render(&sample()).unwrap();
        let mut reversed_input = sample();
        reversed_input.reverse();
        let mut reversed = engine.render(&reversed_input).unwrap();
        reversed.cells.reverse();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn hover_lookup_feeds_tooltip() {
        let engine = HeatmapEngine::default();
        let chart = engine.render(&sample()).unwrap();
        let cell = chart.cell_at(101.0, 101.0).unwrap();
        let tooltip = engine.tooltip_for(&cell.record());
        assert_eq!(tooltip.lines[1], "Month: January");
        assert!(chart.cell_at(5.0, 5.0).is_none());
    }
}
