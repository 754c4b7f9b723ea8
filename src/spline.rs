//! A Kochanek-Bartels spline through colored control points.

use kurbo::{BezPath, CubicBez, Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::hermite::Hermite;
use crate::render::{Line, LineSink, Vertex};
use crate::tcb::TcbParams;

const DEFAULT_SEGMENTS: usize = 16;

/// A point the curve passes through, with the color the curve has there.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct ControlPoint {
    pub pos: Point,
    pub color: Rgba,
}

/// A Kochanek-Bartels (TCB) spline: control points plus how to draw them.
///
/// Control points are kept in insertion order, which is the order the curve
/// visits them. The curve is evaluated with [`solve`](KochanekBartels::solve)
/// or drawn directly with [`render`](KochanekBartels::render).
///
/// ```
/// use tcb_spline::{KochanekBartels, LineStrip};
///
/// let mut spline = KochanekBartels::new().with_segments(8);
/// spline.add_point(0.0, 0.0, 1.0, 0.0, 0.0, 1.0);
/// spline.add_point(10.0, 5.0, 0.0, 0.0, 1.0, 1.0);
/// spline.add_point(20.0, 0.0, 0.0, 1.0, 0.0, 1.0);
///
/// let mut strips: Vec<LineStrip> = Vec::new();
/// spline.render(&mut strips);
/// assert_eq!(strips[0].vertices.len(), 2 * 8 + 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct KochanekBartels {
    points: Vec<ControlPoint>,
    /// Number of line segments drawn between two consecutive control points.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_segments"))]
    segments: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    params: TcbParams,
    width: f64,
    /// `false` paints each segment in the color of its start point.
    interpolate_color: bool,
}

/// A solved spline: one Hermite piece per pair of consecutive control points.
///
/// A `Curve` is a snapshot; it does not change when the [`KochanekBartels`]
/// it came from does.
#[derive(Clone, Debug)]
pub struct Curve {
    segments: Vec<Segment>,
}

/// The piece of a curve between two consecutive control points.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    start: ControlPoint,
    end: ControlPoint,
    position: Hermite<Vec2>,
    color: SegmentColor,
}

#[derive(Clone, Copy, Debug)]
enum SegmentColor {
    Flat(Rgba),
    Smooth(Hermite<Rgba>),
}

/// At least one segment is drawn between two control points.
#[cfg(feature = "serde")]
fn deserialize_segments<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde_::Deserializer<'de>,
{
    usize::deserialize(deserializer).map(|segments| segments.max(1))
}

impl ControlPoint {
    pub fn new(pos: impl Into<Point>, color: Rgba) -> ControlPoint {
        ControlPoint {
            pos: pos.into(),
            color,
        }
    }
}

impl Default for KochanekBartels {
    fn default() -> KochanekBartels {
        KochanekBartels {
            points: Vec::new(),
            segments: DEFAULT_SEGMENTS,
            params: TcbParams::CATMULL_ROM,
            width: 1.0,
            interpolate_color: true,
        }
    }
}

impl KochanekBartels {
    /// An empty Catmull-Rom spline.
    pub fn new() -> KochanekBartels {
        KochanekBartels::default()
    }

    /// Append a control point.
    ///
    /// Nothing is validated: positions and colors are stored as given.
    pub fn add_point(&mut self, x: f64, y: f64, red: f64, green: f64, blue: f64, alpha: f64) {
        self.push(ControlPoint::new(
            (x, y),
            Rgba::new(red, green, blue, alpha),
        ));
    }

    pub fn push(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Remove all control points, keeping the configuration.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Set the number of line segments drawn between two control points.
    ///
    /// At least one segment is always drawn; 0 is treated as 1.
    pub fn set_segments(&mut self, segments: usize) {
        self.segments = segments.max(1);
    }

    pub fn params(&self) -> TcbParams {
        self.params
    }

    pub fn set_params(&mut self, params: TcbParams) {
        self.params = params;
    }

    pub fn tension(&self) -> f64 {
        self.params.tension
    }

    pub fn set_tension(&mut self, tension: f64) {
        self.params.tension = tension;
    }

    pub fn continuity(&self) -> f64 {
        self.params.continuity
    }

    pub fn set_continuity(&mut self, continuity: f64) {
        self.params.continuity = continuity;
    }

    pub fn bias(&self) -> f64 {
        self.params.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.params.bias = bias;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn interpolate_color(&self) -> bool {
        self.interpolate_color
    }

    pub fn set_interpolate_color(&mut self, interpolate_color: bool) {
        self.interpolate_color = interpolate_color;
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.set_segments(segments);
        self
    }

    pub fn with_params(mut self, params: TcbParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_interpolate_color(mut self, interpolate_color: bool) -> Self {
        self.interpolate_color = interpolate_color;
        self
    }

    /// Compute the tangents at every control point and build the curve.
    ///
    /// With fewer than two control points the curve is empty.
    pub fn solve(&self) -> Curve {
        let n = self.points.len();
        if n < 2 {
            return Curve {
                segments: Vec::new(),
            };
        }
        let positions = self
            .points
            .iter()
            .map(|p| p.pos.to_vec2())
            .collect::<Vec<_>>();
        let tangents = self.params.solve(&positions);
        let color_tangents = if self.interpolate_color {
            let colors = self.points.iter().map(|p| p.color).collect::<Vec<_>>();
            Some(self.params.solve(&colors))
        } else {
            None
        };

        let segments = (0..n - 1)
            .map(|i| {
                let (start, end) = (self.points[i], self.points[i + 1]);
                let position = Hermite::new(
                    positions[i],
                    tangents[i].outgoing,
                    positions[i + 1],
                    tangents[i + 1].incoming,
                );
                let color = match &color_tangents {
                    Some(ct) if start.color != end.color => SegmentColor::Smooth(Hermite::new(
                        start.color,
                        ct[i].outgoing,
                        end.color,
                        ct[i + 1].incoming,
                    )),
                    _ => SegmentColor::Flat(start.color),
                };
                Segment {
                    start,
                    end,
                    position,
                    color,
                }
            })
            .collect::<Vec<_>>();
        log::trace!(
            "solved spline: {} control points, {} segments, {:?}",
            n,
            segments.len(),
            self.params
        );
        Curve { segments }
    }

    /// The line strip for the current configuration.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.solve().vertices(self.segments)
    }

    /// The individual line segments for the current configuration.
    pub fn lines(&self) -> Vec<Line> {
        self.solve().lines(self.segments).collect()
    }

    /// The exact curve as a Bézier path.
    pub fn to_bezpath(&self) -> BezPath {
        self.solve().render()
    }

    /// Draw the curve with the configured width.
    pub fn render<S: LineSink + ?Sized>(&self, sink: &mut S) {
        self.render_with_width(sink, self.width);
    }

    /// Draw the curve with a one-off width.
    ///
    /// The configured width is left untouched.
    pub fn render_with_width<S: LineSink + ?Sized>(&self, sink: &mut S, width: f64) {
        if self.points.len() < 2 {
            log::debug!(
                "not rendering spline with {} control point(s)",
                self.points.len()
            );
            return;
        }
        let vertices = self.vertices();
        log::trace!("rendering {} vertices at width {}", vertices.len(), width);
        sink.line_strip(&vertices, width);
    }
}

impl Curve {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sample the curve as a connected line strip.
    ///
    /// Each segment is sampled at `subdivisions` evenly spaced parameters
    /// starting at its first control point; the end of the last segment is
    /// appended once. Shared control points appear once, so the strip holds
    /// `segments * subdivisions + 1` vertices, or none for an empty curve.
    pub fn vertices(&self, subdivisions: usize) -> Vec<Vertex> {
        let n = subdivisions.max(1);
        let mut result = Vec::with_capacity(self.segments.len() * n + 1);
        for segment in &self.segments {
            result.extend((0..n).map(|k| segment.eval(k as f64 / n as f64)));
        }
        if let Some(last) = self.segments.last() {
            result.push(last.eval(1.0));
        }
        result
    }

    /// The curve as `segments * subdivisions` line segments.
    ///
    /// Unlike [`vertices`](Curve::vertices), both ends of each line are
    /// evaluated within the segment that owns it, so with flat coloring every
    /// line carries exactly its segment's color.
    pub fn lines(&self, subdivisions: usize) -> impl Iterator<Item = Line> + '_ {
        let n = subdivisions.max(1);
        self.segments.iter().flat_map(move |segment| {
            (0..n).map(move |k| Line {
                from: segment.eval(k as f64 / n as f64),
                to: segment.eval((k + 1) as f64 / n as f64),
            })
        })
    }

    /// Render the curve to a Bézier path.
    pub fn render(&self) -> BezPath {
        let mut path = BezPath::new();
        self.render_extend(&mut path);
        path
    }

    /// Render the curve, appending to the given path.
    ///
    /// An empty curve appends nothing.
    pub fn render_extend(&self, path: &mut BezPath) {
        if let Some(first) = self.segments.first() {
            path.move_to(first.start.pos);
            for segment in &self.segments {
                let c = segment.to_cubic_bez();
                path.curve_to(c.p1, c.p2, c.p3);
            }
        }
    }
}

impl Segment {
    pub fn start(&self) -> &ControlPoint {
        &self.start
    }

    pub fn end(&self) -> &ControlPoint {
        &self.end
    }

    /// The position curve, with its tangents.
    pub fn position(&self) -> &Hermite<Vec2> {
        &self.position
    }

    /// `true` if every point of the segment has the start point's color.
    pub fn is_flat_color(&self) -> bool {
        matches!(self.color, SegmentColor::Flat(_))
    }

    pub fn color_at(&self, t: f64) -> Rgba {
        match &self.color {
            SegmentColor::Flat(color) => *color,
            SegmentColor::Smooth(h) => h.eval(t),
        }
    }

    /// Evaluate the segment at `t` in 0..=1.
    pub fn eval(&self, t: f64) -> Vertex {
        Vertex {
            pos: self.position.eval(t).to_point(),
            color: self.color_at(t),
        }
    }

    pub fn to_cubic_bez(&self) -> CubicBez {
        self.position.to_cubic_bez()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LineStrip;
    use approx::assert_abs_diff_eq;
    use kurbo::ParamCurve;

    fn zigzag(params: TcbParams) -> KochanekBartels {
        let mut spline = KochanekBartels::new().with_params(params).with_segments(7);
        spline.add_point(0.0, 0.0, 1.0, 0.0, 0.0, 1.0);
        spline.add_point(3.0, 4.0, 0.0, 1.0, 0.0, 1.0);
        spline.add_point(5.0, -1.0, 0.0, 0.0, 1.0, 1.0);
        spline.add_point(9.0, 2.0, 1.0, 1.0, 1.0, 0.5);
        spline.add_point(10.0, 8.0, 0.0, 0.0, 0.0, 1.0);
        spline
    }

    #[test]
    fn empty_spline_doesnt_crash() {
        let spline = KochanekBartels::new();
        assert!(spline.solve().is_empty());
        assert!(spline.vertices().is_empty());
        assert!(spline.lines().is_empty());
        assert!(spline.to_bezpath().elements().is_empty());
    }

    #[test]
    fn add_point_stores_values_as_given() {
        let mut spline = KochanekBartels::new();
        spline.add_point(1.5, -2.0, 2.0, -1.0, 0.5, 7.0);
        assert_eq!(spline.point_count(), 1);
        let p = spline.points()[0];
        assert_eq!(p.pos, Point::new(1.5, -2.0));
        assert_eq!(p.color, Rgba::new(2.0, -1.0, 0.5, 7.0));
        spline.clear();
        assert_eq!(spline.point_count(), 0);
    }

    #[test]
    fn configuration() {
        let mut spline = KochanekBartels::new();
        assert_eq!(spline.segments(), DEFAULT_SEGMENTS);
        assert_eq!(spline.params(), TcbParams::CATMULL_ROM);
        spline.set_tension(0.5);
        spline.set_continuity(-3.0);
        spline.set_bias(0.25);
        assert_eq!(spline.params(), TcbParams::new(0.5, -3.0, 0.25));
        spline.set_segments(0);
        assert_eq!(spline.segments(), 1);
        spline.set_width(4.0);
        assert_eq!(spline.width(), 4.0);
        spline.set_interpolate_color(false);
        assert!(!spline.interpolate_color());
    }

    #[test]
    fn sample_counts() {
        let spline = zigzag(TcbParams::new(0.3, -0.2, 0.6));
        let curve = spline.solve();
        assert_eq!(curve.segments().len(), 4);
        assert_eq!(curve.lines(7).count(), 4 * 7);
        assert_eq!(curve.vertices(7).len(), 4 * 7 + 1);
        assert_eq!(curve.vertices(0).len(), 4 + 1);
    }

    #[test]
    fn curve_passes_through_control_points() {
        let spline = zigzag(TcbParams::new(-0.5, 0.8, -0.3));
        let vertices = spline.vertices();
        for (i, p) in spline.points().iter().enumerate() {
            assert_eq!(vertices[i * 7].pos, p.pos);
        }
    }

    #[test]
    fn joins_are_continuous() {
        let cases = [
            TcbParams::CATMULL_ROM,
            TcbParams::new(0.9, 0.0, 0.0),
            TcbParams::new(-1.0, 1.0, -1.0),
            TcbParams::new(3.0, -2.5, 4.0),
        ];
        for &params in &cases {
            let lines = zigzag(params).lines();
            for seg in 1..4 {
                let last = lines[seg * 7 - 1];
                let first = lines[seg * 7];
                assert_abs_diff_eq!(last.to.pos.x, first.from.pos.x, epsilon = 1e-9);
                assert_abs_diff_eq!(last.to.pos.y, first.from.pos.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn flat_color_uses_segment_start() {
        let spline = zigzag(TcbParams::default()).with_interpolate_color(false);
        let curve = spline.solve();
        for (segment, start) in curve.segments().iter().zip(spline.points()) {
            assert!(segment.is_flat_color());
            assert_eq!(segment.eval(0.0).color, start.color);
            assert_eq!(segment.eval(0.6).color, start.color);
            assert_eq!(segment.eval(1.0).color, start.color);
        }
        let vertices = curve.vertices(7);
        assert_eq!(vertices.last().unwrap().color, spline.points()[3].color);
    }

    #[test]
    fn interpolated_color_hits_control_colors() {
        let spline = zigzag(TcbParams::default());
        let vertices = spline.vertices();
        for (i, p) in spline.points().iter().enumerate() {
            assert_eq!(vertices[i * 7].color, p.color);
        }
        let mid = spline.solve().segments()[0].color_at(0.5);
        assert_abs_diff_eq!(mid.r + mid.g, 1.0, epsilon = 0.2);
        assert!(mid.r > 0.0 && mid.r < 1.0);
    }

    #[test]
    fn equal_colors_stay_flat() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let mut spline = KochanekBartels::new().with_segments(10);
        spline.push(ControlPoint::new((0.0, 0.0), Rgba::BLACK));
        spline.push(ControlPoint::new((1.0, 1.0), red));
        spline.push(ControlPoint::new((2.0, 1.0), red));
        spline.push(ControlPoint::new((3.0, 0.0), Rgba::WHITE));
        let curve = spline.solve();
        let middle = &curve.segments()[1];
        assert!(middle.is_flat_color());
        for line in curve.lines(10).skip(10).take(10) {
            assert_eq!(line.from.color, red);
            assert_eq!(line.to.color, red);
        }
    }

    #[test]
    fn render_with_width_is_one_off() {
        let spline = zigzag(TcbParams::default()).with_width(2.0);
        let mut strips: Vec<LineStrip> = Vec::new();
        spline.render_with_width(&mut strips, 6.0);
        spline.render(&mut strips);
        assert_eq!(strips.len(), 2);
        assert_eq!(strips[0].width, 6.0);
        assert_eq!(strips[1].width, 2.0);
        assert_eq!(strips[0].vertices, strips[1].vertices);
        assert_eq!(spline.width(), 2.0);
        assert_eq!(strips[0].lines().count(), 4 * 7);
    }

    #[test]
    fn bezpath_traces_the_same_curve() {
        let spline = zigzag(TcbParams::new(0.2, 0.4, -0.6));
        let curve = spline.solve();
        let path = curve.render();
        // moveto plus one curveto per segment
        assert_eq!(path.elements().len(), 5);
        for (segment, c) in curve.segments().iter().zip(path.segments()) {
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let a = segment.eval(t).pos;
                let b = c.eval(t);
                assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
                assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_config() {
        let json = r#"{
            "points": [
                { "pos": { "x": 0.0, "y": 0.0 }, "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 } },
                { "pos": { "x": 4.0, "y": 2.0 }, "color": { "r": 0.0, "g": 0.0, "b": 1.0, "a": 1.0 } }
            ],
            "segments": 5,
            "tension": 0.5
        }"#;
        let spline: KochanekBartels = serde_json::from_str(json).unwrap();
        assert_eq!(spline.point_count(), 2);
        assert_eq!(spline.segments(), 5);
        assert_eq!(spline.params(), TcbParams::new(0.5, 0.0, 0.0));
        assert_eq!(spline.width(), 1.0);
        assert!(spline.interpolate_color());

        let text = serde_json::to_string(&spline).unwrap();
        let back: KochanekBartels = serde_json::from_str(&text).unwrap();
        assert_eq!(back, spline);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_zero_segments_draws_one() {
        let json = r#"{
            "points": [
                { "pos": { "x": 0.0, "y": 0.0 }, "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 } },
                { "pos": { "x": 4.0, "y": 2.0 }, "color": { "r": 0.0, "g": 0.0, "b": 1.0, "a": 1.0 } }
            ],
            "segments": 0
        }"#;
        let spline: KochanekBartels = serde_json::from_str(json).unwrap();
        assert_eq!(spline.segments(), 1);
        assert_eq!(spline.vertices().len(), spline.segments() + 1);
        assert_eq!(spline.lines().len(), 1);
    }
}
