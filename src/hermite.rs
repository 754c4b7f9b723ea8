//! The cubic Hermite basis.
//!
//! A Hermite curve is given by its two endpoints and the tangent at each of
//! them. The same basis blends positions and colors, so it is written over
//! the [`Blend`] trait rather than over points.

use std::ops::{Add, Mul, Sub};

use kurbo::{CubicBez, Vec2};

/// A value that can be blended linearly: added, subtracted and scaled.
///
/// Positions (as [`Vec2`]), colors and plain scalars all qualify.
pub trait Blend: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> {}

impl<T> Blend for T where T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T> {}

/// The four Hermite basis polynomials `[h00, h10, h01, h11]` at `t`.
///
/// `h00` and `h01` weight the start and end values, `h10` and `h11` the
/// start and end tangents.
#[inline]
pub fn hermite_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

/// One cubic Hermite piece.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hermite<T> {
    /// Value at `t = 0`.
    pub p0: T,
    /// Tangent leaving `p0`.
    pub m0: T,
    /// Value at `t = 1`.
    pub p1: T,
    /// Tangent arriving at `p1`.
    pub m1: T,
}

impl<T: Blend> Hermite<T> {
    pub fn new(p0: T, m0: T, p1: T, m1: T) -> Hermite<T> {
        Hermite { p0, m0, p1, m1 }
    }

    /// Evaluate the curve at `t`, nominally in 0..=1.
    ///
    /// The endpoints are reproduced exactly, which keeps adjoining pieces
    /// joined without floating point gaps.
    pub fn eval(&self, t: f64) -> T {
        if t == 0.0 {
            return self.p0;
        }
        if t == 1.0 {
            return self.p1;
        }
        let [h00, h10, h01, h11] = hermite_basis(t);
        self.p0 * h00 + self.m0 * h10 + self.p1 * h01 + self.m1 * h11
    }
}

impl Hermite<Vec2> {
    /// The cubic Bézier tracing exactly the same curve.
    pub fn to_cubic_bez(&self) -> CubicBez {
        let third = 1.0 / 3.0;
        CubicBez::new(
            self.p0.to_point(),
            (self.p0 + self.m0 * third).to_point(),
            (self.p1 - self.m1 * third).to_point(),
            self.p1.to_point(),
        )
    }
}
