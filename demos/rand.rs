//! A simple test program that draws a spline through random points.
//!
//! Each control point gets a random color, and the curve is drawn as a strip
//! of short colored lines in an SVG page.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use tcb_spline::{KochanekBartels, LineSink, TcbParams, Vertex};

/// Writes each line of a strip as an SVG `<line>`.
struct SvgLines(String);

impl LineSink for SvgLines {
    fn line_strip(&mut self, vertices: &[Vertex], width: f64) {
        for w in vertices.windows(2) {
            self.0.push_str(&format!(
                r#"      <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}" stroke-linecap="round" />
"#,
                w[0].pos.x, w[0].pos.y, w[1].pos.x, w[1].pos.y, w[0].color, width
            ));
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = rand::thread_rng();
    const N: usize = 10;
    let coord = Uniform::from(0.0..500.0);
    let channel = Uniform::from(0.0..1.0);
    let params = TcbParams::new(
        rng.gen_range(-1.0, 1.0),
        rng.gen_range(-1.0, 1.0),
        rng.gen_range(-1.0, 1.0),
    );
    log::info!("drawing {} random points with {:?}", N, params);

    let mut spline = KochanekBartels::new()
        .with_params(params)
        .with_segments(24)
        .with_width(3.0);
    for _ in 0..N {
        spline.add_point(
            coord.sample(&mut rng),
            coord.sample(&mut rng),
            channel.sample(&mut rng),
            channel.sample(&mut rng),
            channel.sample(&mut rng),
            1.0,
        );
    }

    let mut svg = SvgLines(String::new());
    spline.render(&mut svg);
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#ccc" stroke-width="8" />"##,
        spline.to_bezpath().to_svg()
    );
    print!("{}", svg.0);
    for pt in spline.points() {
        println!(
            r#"      <circle cx="{}" cy="{}" r="4" fill="{}" stroke="black" />"#,
            pt.pos.x, pt.pos.y, pt.color
        )
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
