use std::sync::Mutex;

/// Counts chart renders and failed attempts across callers.
pub struct RenderMetrics {
    inner: Mutex<Metrics>,
}

struct Metrics {
    rendered: usize,
    failed: usize,
    last_cell_count: usize,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                rendered: 0,
                failed: 0,
                last_cell_count: 0,
            }),
        }
    }

    pub fn record_render(&self, cell_count: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rendered += 1;
            metrics.last_cell_count = cell_count;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failed += 1;
        }
    }

    /// `(rendered, failed, last_cell_count)`
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.rendered, metrics.failed, metrics.last_cell_count)
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = RenderMetrics::new();
        metrics.record_render(3153);
        metrics.record_failure();
        metrics.record_render(12);
        assert_eq!(metrics.snapshot(), (2, 1, 12));
    }
}
