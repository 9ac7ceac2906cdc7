//! Visual-mapping engine for the monthly global temperature heatmap.
//!
//! Records go in; positioned cells, axes and a legend come out as plain
//! descriptors that any drawing surface can paint. Nothing here performs I/O.

pub mod color;
pub mod engine;
pub mod layout;
pub mod legend;
pub mod math;
pub mod model;
pub mod prelude;
pub mod scale;
pub mod telemetry;
pub mod ticks;
pub mod tooltip;

pub use engine::HeatmapEngine;
pub use model::{parse_payload, ChartDescriptor, DatasetRecord};
pub use prelude::{ChartConfig, ChartError, ChartResult, FetchError};
pub use scale::ScaleSet;
pub use tooltip::{format_tooltip, TooltipContent};
