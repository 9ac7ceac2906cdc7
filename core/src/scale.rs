use crate::color::{RdYlBu, SequentialColorScale};
use crate::math::{extent, BandScale, DiscreteScale};
use crate::model::DatasetRecord;
use crate::prelude::{ChartConfig, ChartError, ChartResult, MAX_YEAR_SPAN};
use log::{debug, warn};

pub type ColorScale = SequentialColorScale<RdYlBu>;

pub const FIRST_MONTH: u32 = 1;
pub const LAST_MONTH: u32 = 12;

/// Smallest and largest year present in `records`.
pub fn compute_year_domain(records: &[DatasetRecord]) -> ChartResult<(i32, i32)> {
    extent(records, |r| r.year).ok_or(ChartError::EmptyDataset)
}

/// Rejects year ranges with more than [`MAX_YEAR_SPAN`] bands.
pub fn check_year_span(domain: (i32, i32)) -> ChartResult<()> {
    let span = i64::from(domain.1) - i64::from(domain.0) + 1;
    if span > MAX_YEAR_SPAN {
        return Err(ChartError::YearSpanTooWide {
            first: domain.0,
            last: domain.1,
        });
    }
    Ok(())
}

/// The month axis always spans the whole calendar, whatever the data holds.
pub fn compute_month_domain() -> (u32, u32) {
    (FIRST_MONTH, LAST_MONTH)
}

pub fn compute_variance_extrema(records: &[DatasetRecord]) -> ChartResult<(f64, f64)> {
    extent(records, |r| r.variance).ok_or(ChartError::EmptyDataset)
}

/// One band per year in `[min, max]`, laid out over `[padding, width - padding]`.
pub fn build_year_scale(domain: (i32, i32), width: f64, padding: f64) -> BandScale {
    BandScale::from_inclusive(domain.0, domain.1, (padding, width - padding))
}

/// Months 1..=12 over `[padding, height - padding]`, January on top.
pub fn build_month_scale(height: f64, padding: f64) -> BandScale {
    let (first, last) = compute_month_domain();
    BandScale::from_inclusive(first as i32, last as i32, (padding, height - padding))
}

/// Color scale over absolute temperatures.
///
/// `domain` is `(warmest, coolest)`: the warm end lands on the palette's
/// t = 0 (red) and the cool end on t = 1 (blue).
pub fn build_color_scale(domain: (f64, f64)) -> ColorScale {
    SequentialColorScale::new(domain, RdYlBu)
}

/// Scales derived from one dataset under one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSet {
    pub year_scale: BandScale,
    pub month_scale: BandScale,
    pub color_scale: ColorScale,
    pub year_domain: (i32, i32),
    pub variance_extrema: (f64, f64),
    pub base_temperature: f64,
}

impl ScaleSet {
    pub fn build(records: &[DatasetRecord], config: &ChartConfig) -> ChartResult<Self> {
        let year_domain = compute_year_domain(records)?;
        check_year_span(year_domain)?;
        let variance_extrema = compute_variance_extrema(records)?;
        let base = config.base_temperature;

        let year_scale = build_year_scale(year_domain, config.width, config.padding);
        let month_scale = build_month_scale(config.height, config.padding);
        let color_scale =
            build_color_scale((variance_extrema.1 + base, variance_extrema.0 + base));

        if year_domain.0 == year_domain.1 {
            warn!("single year {} collapses the x-axis to one band", year_domain.0);
        }
        if variance_extrema.0 == variance_extrema.1 {
            warn!(
                "constant variance {} collapses the color domain to a point",
                variance_extrema.0
            );
        }
        debug!(
            "scales built: years {}..={} ({} bands of {:.3}px), variance {:.3}..{:.3}",
            year_domain.0,
            year_domain.1,
            year_scale.domain().len(),
            year_scale.step(),
            variance_extrema.0,
            variance_extrema.1
        );

        Ok(Self {
            year_scale,
            month_scale,
            color_scale,
            year_domain,
            variance_extrema,
            base_temperature: base,
        })
    }

    /// Absolute temperature range `(coolest, warmest)`.
    pub fn temperature_extent(&self) -> (f64, f64) {
        (
            self.variance_extrema.0 + self.base_temperature,
            self.variance_extrema.1 + self.base_temperature,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Interpolator, RdYlBu};
    use crate::math::DiscreteScale;

    fn sample() -> Vec<DatasetRecord> {
        vec![
            DatasetRecord::new(1900, 1, -0.5),
            DatasetRecord::new(2000, 6, 1.2),
        ]
    }

    #[test]
    fn year_scale_has_one_band_per_year() {
        let scales = ScaleSet::build(&sample(), &ChartConfig::default()).unwrap();
        assert_eq!(scales.year_domain, (1900, 2000));
        assert_eq!(scales.year_scale.domain().len(), 101);

        let width = scales.year_scale.bandwidth();
        let mut previous_end = f64::NEG_INFINITY;
        for year in 1900..=2000 {
            let start = scales.year_scale.map(year).unwrap();
            assert!(start >= previous_end - 1e-9);
            previous_end = start + width;
        }
        assert!((previous_end - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn month_scale_ignores_data_months() {
        let records = vec![DatasetRecord::new(1950, 7, 0.1)];
        let scales = ScaleSet::build(&records, &ChartConfig::default()).unwrap();
        assert_eq!(
            scales.month_scale.domain(),
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
        );
        assert_eq!(scales.month_scale.map(1), Some(100.0));
    }

    #[test]
    fn warmest_value_maps_to_red_end() {
        let scales = ScaleSet::build(&sample(), &ChartConfig::default()).unwrap();
        let (coolest, warmest) = scales.temperature_extent();
        assert!((coolest - 8.16).abs() < 1e-9);
        assert!((warmest - 9.86).abs() < 1e-9);
        assert_eq!(scales.color_scale.color(warmest), RdYlBu.interpolate(0.0));
        assert_eq!(scales.color_scale.color(coolest), RdYlBu.interpolate(1.0));
    }

    #[test]
    fn empty_input_fails_fast() {
        assert_eq!(
            ScaleSet::build(&[], &ChartConfig::default()),
            Err(ChartError::EmptyDataset)
        );
    }

    #[test]
    fn extreme_year_range_is_rejected_before_layout() {
        let records = vec![
            DatasetRecord::new(-2_000_000_000, 1, 0.0),
            DatasetRecord::new(2_000_000_000, 2, 0.0),
        ];
        assert_eq!(
            ScaleSet::build(&records, &ChartConfig::default()),
            Err(ChartError::YearSpanTooWide {
                first: -2_000_000_000,
                last: 2_000_000_000,
            })
        );
    }

    #[test]
    fn year_span_limit_is_inclusive() {
        assert!(check_year_span((1, MAX_YEAR_SPAN as i32)).is_ok());
        assert!(check_year_span((0, MAX_YEAR_SPAN as i32)).is_err());
        assert!(check_year_span((i32::MIN, i32::MAX)).is_err());
    }

    #[test]
    fn single_record_collapses_without_dividing_by_zero() {
        let records = vec![DatasetRecord::new(2020, 3, 0.0)];
        let scales = ScaleSet::build(&records, &ChartConfig::default()).unwrap();
        assert_eq!(scales.year_scale.domain().len(), 1);
        assert_eq!(scales.year_scale.bandwidth(), 1000.0);
        let color = scales.color_scale.color(8.66);
        assert_eq!(color, RdYlBu.interpolate(0.5));
    }

    #[test]
    fn building_twice_is_deterministic() {
        let config = ChartConfig::default();
        assert_eq!(
            ScaleSet::build(&sample(), &config).unwrap(),
            ScaleSet::build(&sample(), &config).unwrap()
        );
    }
}
