use crate::color::palette::Interpolator;
use crate::color::rgb::Color;

/// Continuous domain mapped onto an interpolator's `[0, 1]` parameter.
///
/// The domain is kept in the order given: `domain.0` maps to `t = 0` and
/// `domain.1` to `t = 1`, so a descending domain reverses the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialColorScale<I> {
    domain: (f64, f64),
    interpolator: I,
}

impl<I: Interpolator> SequentialColorScale<I> {
    pub fn new(domain: (f64, f64), interpolator: I) -> Self {
        Self {
            domain,
            interpolator,
        }
    }

    /// Interpolator parameter for `value`; a collapsed domain yields 0.5.
    pub fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 {
            0.5
        } else {
            (value - d0) / span
        }
    }

    pub fn color(&self, value: f64) -> Color {
        self.interpolator.interpolate(self.normalize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette::RdYlBu;

    #[test]
    fn descending_domain_puts_high_values_at_red_end() {
        let scale = SequentialColorScale::new((12.0, 2.0), RdYlBu);
        assert_eq!(scale.color(12.0), RdYlBu.interpolate(0.0));
        assert_eq!(scale.color(2.0), RdYlBu.interpolate(1.0));
        assert!((scale.normalize(7.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn collapsed_domain_maps_to_midpoint() {
        let scale = SequentialColorScale::new((8.66, 8.66), RdYlBu);
        assert_eq!(scale.normalize(8.66), 0.5);
        assert_eq!(scale.color(100.0), RdYlBu.interpolate(0.5));
    }
}
