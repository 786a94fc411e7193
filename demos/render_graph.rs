//! Renders the visibility graph of a small scene to SVG.
//!
//! Run with: cargo run --example render_graph [output.svg]
//!
//! Set `RUST_LOG=debug` to see the computation's log output.

use visgraph::{compute_visibility_graph, Obstacle, Point2, Ring, VisibilityGraph};

use std::error::Error;
use std::fs::File;
use std::io::Write;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const SCALE: f64 = 40.0;
const MARGIN: f64 = 40.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "visibility_graph.svg".to_string());

    let obstacles = scene();
    let graph = compute_visibility_graph(&obstacles)?;

    let mut svg = Svg::new(WIDTH, HEIGHT);
    draw_obstacles(&mut svg, &obstacles);
    draw_graph(&mut svg, &graph);
    svg.text(
        MARGIN,
        HEIGHT - 12.0,
        &format!(
            "{} obstacles, {} nodes, {} edges",
            obstacles.len(),
            graph.node_count(),
            graph.edge_count()
        ),
        14.0,
        "#e0e0e0",
    );
    svg.save(&path)?;

    println!("Wrote {}", path);
    Ok(())
}

fn scene() -> Vec<Obstacle<f64>> {
    let ring = |corners: &[(f64, f64)]| {
        Ring::closed(corners.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    };

    vec![
        Obstacle::from_exterior(vec![
            Point2::new(0.5, 0.5),
            Point2::new(3.0, 1.2),
            Point2::new(2.0, 3.5),
        ]),
        Obstacle::new(
            ring(&[(5.0, 0.8), (11.0, 0.6), (11.4, 5.2), (5.3, 5.6)]),
            vec![ring(&[(7.2, 2.1), (9.6, 2.4), (8.3, 4.1)])],
        ),
        Obstacle::from_exterior(vec![
            Point2::new(13.0, 1.0),
            Point2::new(17.5, 1.6),
            Point2::new(16.1, 3.3),
            Point2::new(14.9, 2.2),
            Point2::new(13.6, 4.4),
        ]),
        Obstacle::from_exterior(vec![
            Point2::new(1.4, 6.3),
            Point2::new(4.1, 5.4),
            Point2::new(3.6, 9.0),
        ]),
    ]
}

/// Maps scene coordinates to SVG coordinates (y pointing down).
fn to_svg(p: Point2<f64>) -> (f64, f64) {
    (MARGIN + p.x * SCALE, HEIGHT - MARGIN - p.y * SCALE)
}

fn draw_obstacles(svg: &mut Svg, obstacles: &[Obstacle<f64>]) {
    for obstacle in obstacles {
        svg.polygon(obstacle.exterior.corners(), "#3a3a5c", "#8888aa", 1.5);
        for hole in &obstacle.holes {
            svg.polygon(hole.corners(), "#1a1a2e", "#8888aa", 1.5);
        }
    }
}

fn draw_graph(svg: &mut Svg, graph: &VisibilityGraph<f64>) {
    for (a, b) in graph.edges() {
        let (x1, y1) = to_svg(a);
        let (x2, y2) = to_svg(b);
        svg.line(x1, y1, x2, y2, "#4ecdc4", 0.8);
    }
    for &p in graph.nodes() {
        let (cx, cy) = to_svg(p);
        svg.circle(cx, cy, 3.0, "#ff6b6b", "none", 0.0);
    }
}

/// SVG helper to create an SVG document
struct Svg {
    content: String,
    width: f64,
    height: f64,
}

impl Svg {
    fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            cx, cy, r, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn polygon(&mut self, points: &[Point2<f64>], fill: &str, stroke: &str, stroke_width: f64) {
        let pts: String = points
            .iter()
            .map(|&p| {
                let (x, y) = to_svg(p);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            pts, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, text: &str, font_size: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="{}" fill="{}">{}</text>"#,
            x, y, font_size, fill, text
        ));
        self.content.push('\n');
    }

    fn save(&self, path: &str) -> std::io::Result<()> {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
<rect width="100%" height="100%" fill="#1a1a2e"/>
{}
</svg>"##,
            self.width, self.height, self.width, self.height, self.content
        );
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())
    }
}
