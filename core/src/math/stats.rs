/// Minimum and maximum of the projected values; `None` when empty.
///
/// NaN values are skipped so a single bad sample cannot poison the extent.
pub fn extent<T, V, F>(items: &[T], project: F) -> Option<(V, V)>
where
    V: PartialOrd + Copy,
    F: Fn(&T) -> V,
{
    let mut bounds: Option<(V, V)> = None;
    for item in items {
        let value = project(item);
        if value.partial_cmp(&value).is_none() {
            continue;
        }
        bounds = Some(match bounds {
            None => (value, value),
            Some((lo, hi)) => (
                if value < lo { value } else { lo },
                if value > hi { value } else { hi },
            ),
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_empty_slice_is_none() {
        let empty: [f64; 0] = [];
        assert_eq!(extent(&empty, |v| *v), None);
    }

    #[test]
    fn extent_skips_nan() {
        let values = [0.3, f64::NAN, -1.2, 4.5];
        assert_eq!(extent(&values, |v| *v), Some((-1.2, 4.5)));
    }

    #[test]
    fn extent_handles_single_value() {
        assert_eq!(extent(&[1900_i32], |v| *v), Some((1900, 1900)));
    }
}
