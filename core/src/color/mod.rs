pub mod palette;
pub mod rgb;
pub mod sequential;

pub use palette::{Interpolator, RdYlBu};
pub use rgb::Color;
pub use sequential::SequentialColorScale;
