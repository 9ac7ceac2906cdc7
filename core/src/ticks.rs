use crate::math::DiscreteScale;
use crate::model::descriptor::{X_AXIS_ID, Y_AXIS_ID};
use crate::model::{AxisDescriptor, Orientation, Tick};
use crate::prelude::ChartConfig;
use crate::scale::ScaleSet;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name; 1 = January. No calendar or zone arithmetic.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Plain integer label: no digit grouping, no decimals.
pub fn format_year(year: i32) -> String {
    year.to_string()
}

/// Ticks for years in the scale's domain divisible by `interval`.
pub fn year_ticks<S: DiscreteScale>(scale: &S, interval: i32) -> Vec<Tick> {
    let interval = interval.max(1);
    scale
        .domain()
        .iter()
        .filter(|year| year.rem_euclid(interval) == 0)
        .filter_map(|&year| {
            scale.center(year).map(|position| Tick {
                value: f64::from(year),
                position,
                label: format_year(year),
            })
        })
        .collect()
}

/// One tick per month band, labelled with the month name.
pub fn month_ticks<S: DiscreteScale>(scale: &S) -> Vec<Tick> {
    scale
        .domain()
        .iter()
        .filter_map(|&month| {
            let label = u32::try_from(month).ok().and_then(month_name)?;
            scale.center(month).map(|position| Tick {
                value: f64::from(month),
                position,
                label: label.to_string(),
            })
        })
        .collect()
}

/// Year axis along the bottom edge of the plot area.
pub fn x_axis(scales: &ScaleSet, config: &ChartConfig) -> AxisDescriptor {
    AxisDescriptor {
        id: X_AXIS_ID.to_string(),
        orientation: Orientation::Bottom,
        translate: (0.0, config.height - config.padding),
        ticks: year_ticks(&scales.year_scale, config.year_tick_interval),
    }
}

/// Month axis along the left edge of the plot area.
pub fn y_axis(scales: &ScaleSet, config: &ChartConfig) -> AxisDescriptor {
    AxisDescriptor {
        id: Y_AXIS_ID.to_string(),
        orientation: Orientation::Left,
        translate: (config.padding, 0.0),
        ticks: month_ticks(&scales.month_scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::BandScale;

    #[test]
    fn month_names_cover_the_calendar() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn year_ticks_keep_only_decades_in_domain() {
        let scale = BandScale::from_inclusive(1753, 2015, (100.0, 1100.0));
        let ticks = year_ticks(&scale, 10);
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("1760"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("2010"));
        assert_eq!(ticks.len(), 26);
        assert!(ticks
            .iter()
            .all(|t| (t.value as i32) % 10 == 0 && (1753..=2015).contains(&(t.value as i32))));
    }

    #[test]
    fn year_labels_have_no_grouping() {
        assert_eq!(format_year(10000), "10000");
        assert_eq!(format_year(-40), "-40");
    }

    #[test]
    fn negative_decades_are_kept() {
        let scale = BandScale::from_inclusive(-25, 5, (0.0, 31.0));
        let labels: Vec<String> = year_ticks(&scale, 10).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["-20", "-10", "0"]);
    }

    #[test]
    fn month_ticks_sit_at_band_centres() {
        let scale = BandScale::from_inclusive(1, 12, (100.0, 500.0));
        let ticks = month_ticks(&scale);
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0].label, "January");
        let expected = 100.0 + scale.bandwidth() / 2.0;
        assert!((ticks[0].position - expected).abs() < 1e-9);
    }

    #[test]
    fn year_without_decade_produces_no_ticks() {
        let scale = BandScale::from_inclusive(2021, 2021, (100.0, 1100.0));
        assert!(year_ticks(&scale, 10).is_empty());
    }
}
