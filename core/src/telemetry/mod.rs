pub mod log;
pub mod metrics;

pub use self::log::RenderLog;
pub use self::metrics::RenderMetrics;
