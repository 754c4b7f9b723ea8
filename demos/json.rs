//! Render a spline described by a JSON file.
//!
//! The file holds a serialized `KochanekBartels`; any field may be left out
//! and takes its default:
//!
//! ```json
//! {
//!   "points": [
//!     { "pos": { "x": 50, "y": 400 }, "color": { "r": 1, "g": 0, "b": 0, "a": 1 } },
//!     { "pos": { "x": 250, "y": 100 }, "color": { "r": 0, "g": 0, "b": 1, "a": 1 } }
//!   ],
//!   "segments": 20,
//!   "tension": 0.2,
//!   "width": 4,
//!   "interpolate_color": true
//! }
//! ```

use anyhow::Context;

use tcb_spline::{KochanekBartels, LineStrip};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).context("needs filename")?;
    let data = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let spline: KochanekBartels =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path))?;
    log::info!(
        "{}: {} points, {} segments each, {:?}",
        path,
        spline.point_count(),
        spline.segments(),
        spline.params()
    );

    let mut strips: Vec<LineStrip> = Vec::new();
    spline.render(&mut strips);

    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">"##
    );
    for strip in &strips {
        for line in strip.lines() {
            println!(
                r#"      <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}" />"#,
                line.from.pos.x, line.from.pos.y, line.to.pos.x, line.to.pos.y, line.from.color, strip.width
            );
        }
    }
    println!(
        r##"      <path d="{}" fill="none" stroke="#000" stroke-dasharray="4" />"##,
        spline.to_bezpath().to_svg()
    );
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
    Ok(())
}
