use log::{debug, info};

/// Labelled front for the `log` facade used by engine components.
pub struct RenderLog {
    label: &'static str,
}

impl RenderLog {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.label, message);
    }

    pub fn trace(&self, message: &str) {
        debug!("[{}] {}", self.label, message);
    }
}

impl Default for RenderLog {
    fn default() -> Self {
        Self::new("heatmap")
    }
}
