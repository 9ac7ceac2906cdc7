use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unclamped float channels (0..=255 scale).
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let quantize = |v: f64| {
            if v.is_nan() {
                0
            } else {
                v.clamp(0.0, 255.0).round() as u8
            }
        };
        Self::new(quantize(r), quantize(g), quantize(b))
    }
}

impl fmt::Display for Color {
    /// CSS functional notation: `rgb(r, g, b)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
