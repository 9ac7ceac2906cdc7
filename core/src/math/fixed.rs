const TIE_DIGITS: usize = 25;

/// Fixed-point text for `value` with `decimals` places.
///
/// Exact half-way values round away from zero, and a result that reads as
/// zero carries no sign.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.*}", decimals, lift_tie(value.abs(), decimals));
    if value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Pushes an exact tie at `decimals` places just past the midpoint, so the
/// half-to-even formatter rounds it up.
fn lift_tie(magnitude: f64, decimals: usize) -> f64 {
    let expanded = format!("{:.*}", decimals + TIE_DIGITS, magnitude);
    let tail = &expanded[expanded.len() - TIE_DIGITS..];
    if tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0') {
        magnitude + 10f64.powi(-(decimals as i32) - 3)
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-0.625, 2), "-0.63");
        assert_eq!(format_fixed(8.25, 1), "8.3");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn values_stored_below_the_tie_round_down() {
        // 1.005 is held as 1.00499999999999989...
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(8.66, 1), "8.7");
        assert_eq!(format_fixed(-0.5, 2), "-0.50");
    }

    #[test]
    fn negative_zero_is_unsigned() {
        assert_eq!(format_fixed(-0.04, 1), "0.0");
        assert_eq!(format_fixed(-0.0, 2), "0.00");
    }
}
