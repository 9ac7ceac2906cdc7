use crate::color::Color;
use crate::model::record::DatasetRecord;
use serde::{Deserialize, Serialize};

/// Element class carried by every heatmap cell.
pub const CELL_CLASS: &str = "cell";
pub const X_AXIS_ID: &str = "x-axis";
pub const Y_AXIS_ID: &str = "y-axis";
pub const LEGEND_ID: &str = "legend";

/// Values attached to a cell for tooltips and conformance checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMetadata {
    pub year: i32,
    pub month_index0: u32,
    pub absolute_temp: f64,
    pub variance: f64,
}

/// One positioned, colored rectangle of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub metadata: CellMetadata,
}

impl CellDescriptor {
    /// Half-open containment so neighbouring cells never both claim a point.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Reconstructs the record this cell was laid out from.
    pub fn record(&self) -> DatasetRecord {
        DatasetRecord::new(
            self.metadata.year,
            self.metadata.month_index0 + 1,
            self.metadata.variance,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    /// Offset along the axis, in the axis' own coordinate space.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub id: String,
    pub orientation: Orientation,
    pub translate: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl AxisDescriptor {
    pub fn tick_positions(&self) -> Vec<f64> {
        self.ticks.iter().map(|tick| tick.position).collect()
    }

    pub fn tick_labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|tick| tick.label.as_str()).collect()
    }
}

/// Equal-width slice of the absolute temperature range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendBucket {
    pub range_start: f64,
    pub range_end: f64,
    pub representative_value: f64,
    pub color: Color,
    /// Swatch offset from the legend origin.
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendDescriptor {
    pub id: String,
    pub translate: (f64, f64),
    pub width: f64,
    pub height: f64,
    pub buckets: Vec<LegendBucket>,
    pub axis: AxisDescriptor,
}

/// Everything a rendering surface needs to paint one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub width: f64,
    pub height: f64,
    /// Baseline the cells were rendered with; tooltips reuse it.
    pub base_temperature: f64,
    pub cells: Vec<CellDescriptor>,
    pub x_axis: AxisDescriptor,
    pub y_axis: AxisDescriptor,
    pub legend: LegendDescriptor,
}

impl ChartDescriptor {
    /// Cell under the chart-space point, if any.
    pub fn cell_at(&self, px: f64, py: f64) -> Option<&CellDescriptor> {
        self.cells.iter().find(|cell| cell.contains(px, py))
    }
}
