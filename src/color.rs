//! RGBA colors that can be blended like vectors.

use std::fmt;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

/// A color with red, green, blue and alpha channels.
///
/// Channels are conventionally in the range 0..=1, but nothing enforces
/// that: values are stored as given, and interpolation is free to overshoot.
/// Use [`Rgba::to_rgba8`] to get a clamped color for output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Clamp each channel to 0..=1 and convert to bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        let byte = |c: f64| (c.max(0.0).min(1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }
}

impl Add for Rgba {
    type Output = Rgba;

    #[inline]
    fn add(self, other: Rgba) -> Rgba {
        Rgba::new(
            self.r + other.r,
            self.g + other.g,
            self.b + other.b,
            self.a + other.a,
        )
    }
}

impl Sub for Rgba {
    type Output = Rgba;

    #[inline]
    fn sub(self, other: Rgba) -> Rgba {
        Rgba::new(
            self.r - other.r,
            self.g - other.g,
            self.b - other.b,
            self.a - other.a,
        )
    }
}

impl Mul<f64> for Rgba {
    type Output = Rgba;

    #[inline]
    fn mul(self, s: f64) -> Rgba {
        Rgba::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

/// Formats as a CSS color, clamped.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        let a = self.a.max(0.0).min(1.0);
        write!(f, "rgba({}, {}, {}, {:.3})", r, g, b, a)
    }
}
