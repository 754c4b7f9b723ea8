//! Kochanek-Bartels splines through colored 2D points.
//!
//! A Kochanek-Bartels (or TCB) spline is a cubic Hermite curve through a
//! sequence of control points, with the tangent at each point shaped by three
//! parameters: tension, continuity and bias. With all three at zero it is
//! the familiar Catmull-Rom spline.
//!
//! Every control point also carries a color, and the curve can blend those
//! colors along its length using the same tangents and basis as the
//! positions.
//!
//! The crate does not draw anything itself. [`KochanekBartels::render`] hands
//! a strip of positioned, colored vertices to a [`LineSink`], and
//! [`Curve::render`] gives the exact curve as a [`kurbo::BezPath`].

mod color;
mod hermite;
mod render;
mod spline;
mod tcb;

pub use color::Rgba;
pub use hermite::{hermite_basis, Blend, Hermite};
pub use render::{Line, LineSink, LineStrip, Vertex};
pub use spline::{ControlPoint, Curve, KochanekBartels, Segment};
pub use tcb::{KnotTangents, TcbCoefficients, TcbParams};
