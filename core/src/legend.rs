use crate::math::{format_fixed, LinearScale};
use crate::model::descriptor::LEGEND_ID;
use crate::model::{AxisDescriptor, LegendBucket, LegendDescriptor, Orientation, Tick};
use crate::prelude::ChartConfig;
use crate::scale::{ColorScale, ScaleSet};
use log::debug;

pub const LEGEND_BUCKETS: usize = 10;
pub const LEGEND_TICKS: usize = 10;
pub const LEGEND_AXIS_ID: &str = "legend-axis";

/// Splits `[min + base, max + base]` into [`LEGEND_BUCKETS`] equal buckets.
///
/// Representative values are `start + k * step`; the last bucket's upper
/// edge is computed the same way and may miss `max + base` by rounding.
pub fn legend_buckets(
    min_variance: f64,
    max_variance: f64,
    base_temperature: f64,
    color_scale: &ColorScale,
    legend_width: f64,
) -> Vec<LegendBucket> {
    let start = min_variance + base_temperature;
    let step = (max_variance - min_variance) / LEGEND_BUCKETS as f64;
    let swatch = legend_width / LEGEND_BUCKETS as f64;

    (0..LEGEND_BUCKETS)
        .map(|k| {
            let representative_value = start + k as f64 * step;
            LegendBucket {
                range_start: representative_value,
                range_end: representative_value + step,
                representative_value,
                color: color_scale.color(representative_value),
                x: k as f64 * swatch,
                width: swatch,
            }
        })
        .collect()
}

/// One-decimal label; a value that rounds to zero never shows a sign.
pub fn format_legend_value(value: f64) -> String {
    format_fixed(value, 1)
}

/// Linear axis under the swatches spanning `extent` over `[0, width]`.
pub fn legend_axis(extent: (f64, f64), legend_width: f64, legend_height: f64) -> AxisDescriptor {
    let scale = LinearScale::new(extent, (0.0, legend_width));
    let ticks = scale
        .ticks(LEGEND_TICKS)
        .into_iter()
        .map(|value| Tick {
            value,
            position: scale.map(value),
            label: format_legend_value(value),
        })
        .collect();

    AxisDescriptor {
        id: LEGEND_AXIS_ID.to_string(),
        orientation: Orientation::Bottom,
        translate: (0.0, legend_height),
        ticks,
    }
}

/// Legend centred below the x-axis.
pub fn build_legend(scales: &ScaleSet, config: &ChartConfig) -> LegendDescriptor {
    let (min_variance, max_variance) = scales.variance_extrema;
    let legend = &config.legend;
    let buckets = legend_buckets(
        min_variance,
        max_variance,
        scales.base_temperature,
        &scales.color_scale,
        legend.width,
    );
    let axis = legend_axis(scales.temperature_extent(), legend.width, legend.height);
    debug!(
        "legend: {} buckets, {} axis ticks",
        buckets.len(),
        axis.ticks.len()
    );

    LegendDescriptor {
        id: LEGEND_ID.to_string(),
        translate: (
            (config.width - legend.width) / 2.0,
            config.height - config.padding + legend.offset_y,
        ),
        width: legend.width,
        height: legend.height,
        buckets,
        axis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Interpolator, RdYlBu};
    use crate::model::DatasetRecord;
    use crate::scale::build_color_scale;

    #[test]
    fn always_ten_buckets_tiling_the_width() {
        let color = build_color_scale((13.888, 1.684));
        let buckets = legend_buckets(-6.976, 5.228, 8.66, &color, 400.0);
        assert_eq!(buckets.len(), LEGEND_BUCKETS);
        let total: f64 = buckets.iter().map(|b| b.width).sum();
        assert!((total - 400.0).abs() < 1e-9);
        for pair in buckets.windows(2) {
            assert!((pair[0].x + pair[0].width - pair[1].x).abs() < 1e-9);
        }
        assert_eq!(buckets[0].x, 0.0);
    }

    #[test]
    fn representative_values_step_from_the_minimum() {
        let color = build_color_scale((10.0, 0.0));
        let buckets = legend_buckets(-5.0, 5.0, 5.0, &color, 100.0);
        for (k, bucket) in buckets.iter().enumerate() {
            assert!((bucket.representative_value - k as f64).abs() < 1e-9);
            assert!((bucket.range_end - bucket.range_start - 1.0).abs() < 1e-9);
        }
        assert_eq!(buckets[0].color, RdYlBu.interpolate(1.0));
        let last = buckets.last().unwrap();
        assert!((last.range_end - 10.0).abs() < 1e-9);
    }

    #[test]
    fn constant_variance_yields_identical_buckets() {
        let color = build_color_scale((8.66, 8.66));
        let buckets = legend_buckets(0.0, 0.0, 8.66, &color, 400.0);
        assert_eq!(buckets.len(), LEGEND_BUCKETS);
        assert!(buckets.iter().all(|b| b.representative_value == 8.66));
        assert!(buckets.iter().all(|b| b.color == RdYlBu.interpolate(0.5)));
        assert_eq!(buckets[9].x, 360.0);
    }

    #[test]
    fn axis_ticks_use_one_decimal() {
        let axis = legend_axis((1.684, 13.888), 400.0, 30.0);
        assert_eq!(axis.tick_labels().first(), Some(&"2.0"));
        assert_eq!(axis.tick_labels().last(), Some(&"13.0"));
        assert_eq!(axis.translate, (0.0, 30.0));
        assert!(axis.tick_positions().iter().all(|p| (0.0..=400.0).contains(p)));
    }

    #[test]
    fn negative_zero_label_is_normalised() {
        assert_eq!(format_legend_value(-0.04), "0.0");
        assert_eq!(format_legend_value(8.66), "8.7");
        assert_eq!(format_legend_value(8.25), "8.3");
    }

    #[test]
    fn legend_is_centred_below_axis() {
        let records = vec![
            DatasetRecord::new(1900, 1, -0.5),
            DatasetRecord::new(2000, 6, 1.2),
        ];
        let config = ChartConfig::default();
        let scales = ScaleSet::build(&records, &config).unwrap();
        let legend = build_legend(&scales, &config);
        assert_eq!(legend.translate, (400.0, 540.0));
        assert_eq!(legend.id, "legend");
    }
}
