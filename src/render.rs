//! The boundary between curve evaluation and drawing.
//!
//! The spline only produces vertex data. Whatever owns the drawing context
//! implements [`LineSink`] and turns each strip into actual line primitives.

use kurbo::Point;

use crate::color::Rgba;

/// A positioned, colored point on the evaluated curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Point,
    pub color: Rgba,
}

/// Two consecutive vertices of a strip, to be drawn as one line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Vertex,
    pub to: Vertex,
}

/// Receives evaluated curves for drawing.
pub trait LineSink {
    /// Draw `vertices` as a connected strip of line segments `width` wide.
    ///
    /// Consecutive vertices form one segment each. Colors are per vertex;
    /// with flat coloring both ends of every segment share a color.
    fn line_strip(&mut self, vertices: &[Vertex], width: f64);
}

/// A recorded call to [`LineSink::line_strip`].
#[derive(Clone, Debug, PartialEq)]
pub struct LineStrip {
    pub vertices: Vec<Vertex>,
    pub width: f64,
}

impl LineStrip {
    /// The line segments of the strip.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.vertices.windows(2).map(|w| Line {
            from: w[0],
            to: w[1],
        })
    }
}

/// Records every strip, for batching or inspection.
impl LineSink for Vec<LineStrip> {
    fn line_strip(&mut self, vertices: &[Vertex], width: f64) {
        self.push(LineStrip {
            vertices: vertices.to_vec(),
            width,
        });
    }
}
