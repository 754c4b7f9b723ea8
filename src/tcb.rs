//! Tangents for Kochanek-Bartels splines.
//!
//! Each knot gets two tangents, one arriving and one leaving, computed from
//! the knot's neighbors and the tension, continuity and bias parameters.
//! With all three parameters at zero the two tangents agree and reduce to the
//! Catmull-Rom tangent `(next - prev) / 2`.

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::hermite::Blend;

/// Shape parameters of a Kochanek-Bartels spline.
///
/// The conventional range of each parameter is -1..=1. Values outside of
/// that range are accepted and give exaggerated or inverted curves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct TcbParams {
    /// Round (-1) to tight (1).
    pub tension: f64,
    /// Box corners (-1) to inverted corners (1).
    pub continuity: f64,
    /// Pre-shoot (-1) to post-shoot (1).
    pub bias: f64,
}

/// Weights applied to the backward delta `cur - prev` and the forward delta
/// `next - cur` of a knot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TcbCoefficients {
    /// Backward delta, outgoing tangent.
    pub c1: f64,
    /// Forward delta, outgoing tangent.
    pub c2: f64,
    /// Backward delta, incoming tangent.
    pub c3: f64,
    /// Forward delta, incoming tangent.
    pub c4: f64,
}

/// The two tangents at a knot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnotTangents<T> {
    /// Tangent of the curve arriving at the knot.
    pub incoming: T,
    /// Tangent of the curve leaving the knot.
    pub outgoing: T,
}

impl TcbParams {
    pub const CATMULL_ROM: TcbParams = TcbParams::new(0.0, 0.0, 0.0);

    pub const fn new(tension: f64, continuity: f64, bias: f64) -> TcbParams {
        TcbParams {
            tension,
            continuity,
            bias,
        }
    }

    pub fn coefficients(&self) -> TcbCoefficients {
        let t = 1.0 - self.tension;
        let (cm, cp) = (1.0 - self.continuity, 1.0 + self.continuity);
        let (bm, bp) = (1.0 - self.bias, 1.0 + self.bias);
        TcbCoefficients {
            c1: 0.5 * t * cm * bm,
            c2: 0.5 * t * cp * bp,
            c3: 0.5 * t * cp * bm,
            c4: 0.5 * t * cm * bp,
        }
    }

    /// Tangents at `cur`, given its neighbors.
    pub fn knot_tangents<T: Blend>(&self, prev: T, cur: T, next: T) -> KnotTangents<T> {
        self.coefficients().knot_tangents(prev, cur, next)
    }

    /// Tangents at every knot of an open curve.
    ///
    /// The endpoints have only one neighbor. The missing one is taken to
    /// coincide with the endpoint itself, so the delta on that side is zero
    /// and the endpoint tangents are scaled one-sided differences.
    pub fn solve<T: Blend>(&self, values: &[T]) -> Vec<KnotTangents<T>> {
        let coeffs = self.coefficients();
        let n = values.len();
        (0..n)
            .map(|i| {
                let prev = values[i.saturating_sub(1)];
                let next = values[(i + 1).min(n - 1)];
                coeffs.knot_tangents(prev, values[i], next)
            })
            .collect()
    }
}

impl TcbCoefficients {
    pub fn knot_tangents<T: Blend>(&self, prev: T, cur: T, next: T) -> KnotTangents<T> {
        let back = cur - prev;
        let fwd = next - cur;
        KnotTangents {
            incoming: back * self.c3 + fwd * self.c4,
            outgoing: back * self.c1 + fwd * self.c2,
        }
    }
}
