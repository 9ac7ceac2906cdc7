use crate::math::format_fixed;
use crate::model::DatasetRecord;
use crate::ticks::month_name;
use serde::{Deserialize, Serialize};

/// Text shown for a hovered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    /// Year attribute mirrored onto the tooltip element.
    pub data_year: i32,
    pub lines: Vec<String>,
}

impl TooltipContent {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn format_tooltip(record: &DatasetRecord, base_temperature: f64) -> TooltipContent {
    let month = month_name(record.month).unwrap_or("Unknown");
    TooltipContent {
        data_year: record.year,
        lines: vec![
            format!("Year: {}", record.year),
            format!("Month: {}", month),
            format!("Temp: {}℃", format_fixed(record.absolute_temp(base_temperature), 2)),
            format!("Variance: {}℃", format_fixed(record.variance, 2)),
        ],
    }
}
