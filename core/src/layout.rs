use crate::math::DiscreteScale;
use crate::model::{CellDescriptor, CellMetadata, DatasetRecord};
use crate::prelude::{ChartError, ChartResult};
use crate::scale::ScaleSet;

/// Positions and colors the cell for one record.
///
/// Fails only when the record lies outside the scale domains, which cannot
/// happen for records the scales were built from.
pub fn layout_cell(
    index: usize,
    record: &DatasetRecord,
    scales: &ScaleSet,
) -> ChartResult<CellDescriptor> {
    let outside = |axis: &str| ChartError::InvalidRecord {
        index,
        reason: format!("{axis} outside the scale domain"),
    };
    let x = scales
        .year_scale
        .map(record.year)
        .ok_or_else(|| outside("year"))?;
    let month = i32::try_from(record.month).map_err(|_| outside("month"))?;
    let y = scales
        .month_scale
        .map(month)
        .ok_or_else(|| outside("month"))?;

    let absolute_temp = record.absolute_temp(scales.base_temperature);
    Ok(CellDescriptor {
        x,
        y,
        width: scales.year_scale.bandwidth(),
        height: scales.month_scale.bandwidth(),
        fill: scales.color_scale.color(absolute_temp),
        metadata: CellMetadata {
            year: record.year,
            month_index0: record.month_index0(),
            absolute_temp,
            variance: record.variance,
        },
    })
}

/// One cell per record, in input order.
pub fn layout_cells(records: &[DatasetRecord], scales: &ScaleSet) -> ChartResult<Vec<CellDescriptor>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| layout_cell(index, record, scales))
        .collect()
}
