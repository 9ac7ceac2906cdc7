use crate::color::rgb::Color;

/// Maps a normalised parameter `t` in `[0, 1]` to a color.
pub trait Interpolator {
    fn interpolate(&self, t: f64) -> Color;
}

/// Eleven-class RdYlBu scheme, red end first.
const RD_YL_BU: [Color; 11] = [
    Color::new(0xa5, 0x00, 0x26),
    Color::new(0xd7, 0x30, 0x27),
    Color::new(0xf4, 0x6d, 0x43),
    Color::new(0xfd, 0xae, 0x61),
    Color::new(0xfe, 0xe0, 0x90),
    Color::new(0xff, 0xff, 0xbf),
    Color::new(0xe0, 0xf3, 0xf8),
    Color::new(0xab, 0xd9, 0xe9),
    Color::new(0x74, 0xad, 0xd1),
    Color::new(0x45, 0x75, 0xb4),
    Color::new(0x31, 0x36, 0x95),
];

/// Diverging red-yellow-blue ramp: t = 0 is deep red, t = 1 is deep blue.
///
/// The ramp passes a uniform cubic B-spline through the scheme stops, per
/// channel, so adjacent samples blend smoothly instead of kinking at stops.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RdYlBu;

impl Interpolator for RdYlBu {
    fn interpolate(&self, t: f64) -> Color {
        let r = basis_spline(&channel(|c| c.r), t);
        let g = basis_spline(&channel(|c| c.g), t);
        let b = basis_spline(&channel(|c| c.b), t);
        Color::from_channels(r, g, b)
    }
}

fn channel(pick: impl Fn(&Color) -> u8) -> Vec<f64> {
    RD_YL_BU.iter().map(|c| f64::from(pick(c))).collect()
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Evaluates the B-spline through `values`; endpoints are reproduced exactly
/// by reflecting phantom control points.
fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t.is_nan() || t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, ((t * n as f64).floor() as usize).min(n - 1))
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 {
        values[i + 2]
    } else {
        2.0 * v2 - v1
    };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}
