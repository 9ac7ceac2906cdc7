/// Discrete ordered domain mapped onto pixel bands.
pub trait DiscreteScale {
    /// Start of the band for `value`, or `None` when outside the domain.
    fn map(&self, value: i32) -> Option<f64>;
    fn bandwidth(&self) -> f64;
    fn domain(&self) -> &[i32];

    /// Midpoint of the band for `value`; axis ticks sit here.
    fn center(&self, value: i32) -> Option<f64> {
        self.map(value).map(|start| start + self.bandwidth() / 2.0)
    }
}

/// Equal-width, contiguous bands with no inner or outer padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<i32>,
    range: (f64, f64),
    step: f64,
}

impl BandScale {
    /// Builds a scale over `domain`; values are sorted and deduplicated.
    pub fn new(mut domain: Vec<i32>, range: (f64, f64)) -> Self {
        domain.sort_unstable();
        domain.dedup();
        let (start, stop) = ordered(range);
        let step = (stop - start) / domain.len().max(1) as f64;
        Self {
            domain,
            range,
            step,
        }
    }

    /// Scale over every integer in `[lo, hi]`.
    pub fn from_inclusive(lo: i32, hi: i32, range: (f64, f64)) -> Self {
        Self::new((lo..=hi).collect(), range)
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl DiscreteScale for BandScale {
    fn map(&self, value: i32) -> Option<f64> {
        let index = self.domain.binary_search(&value).ok()?;
        let (start, _) = ordered(self.range);
        let slot = if self.range.1 < self.range.0 {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Some(start + self.step * slot as f64)
    }

    fn bandwidth(&self) -> f64 {
        self.step
    }

    fn domain(&self) -> &[i32] {
        &self.domain
    }
}

fn ordered((r0, r1): (f64, f64)) -> (f64, f64) {
    if r1 < r0 {
        (r1, r0)
    } else {
        (r0, r1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_tile_the_range_in_ascending_order() {
        let scale = BandScale::from_inclusive(1, 12, (100.0, 500.0));
        assert_eq!(scale.domain().len(), 12);
        let width = scale.bandwidth();
        assert!((width - 400.0 / 12.0).abs() < 1e-9);
        for month in 1..=12 {
            let start = scale.map(month).unwrap();
            let expected = 100.0 + width * f64::from(month - 1);
            assert!((start - expected).abs() < 1e-9);
        }
        let last = scale.map(12).unwrap() + width;
        assert!((last - 500.0).abs() < 1e-9);
    }

    #[test]
    fn values_outside_domain_are_unmapped() {
        let scale = BandScale::from_inclusive(1900, 1910, (0.0, 110.0));
        assert_eq!(scale.map(1899), None);
        assert_eq!(scale.map(1911), None);
        assert_eq!(scale.center(1900), Some(5.0));
    }

    #[test]
    fn single_value_domain_spans_whole_range() {
        let scale = BandScale::from_inclusive(2020, 2020, (100.0, 1100.0));
        assert_eq!(scale.map(2020), Some(100.0));
        assert_eq!(scale.bandwidth(), 1000.0);
    }

    #[test]
    fn reversed_range_flips_band_order() {
        let scale = BandScale::new(vec![3, 1, 2, 2], (30.0, 0.0));
        assert_eq!(scale.domain(), &[1, 2, 3]);
        assert_eq!(scale.map(1), Some(20.0));
        assert_eq!(scale.map(3), Some(0.0));
    }
}
