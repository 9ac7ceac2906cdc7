pub mod band;
pub mod fixed;
pub mod linear;
pub mod stats;

pub use band::{BandScale, DiscreteScale};
pub use fixed::format_fixed;
pub use linear::{ticks, LinearScale};
pub use stats::extent;
