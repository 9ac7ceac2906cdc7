pub mod descriptor;
pub mod record;

pub use descriptor::{
    AxisDescriptor, CellDescriptor, CellMetadata, ChartDescriptor, LegendBucket,
    LegendDescriptor, Orientation, Tick,
};
pub use record::{parse_payload, validate_records, DatasetRecord, TemperatureDataset};
