// File: crates/stream-core/src/scene.rs
// Summary: Backend-agnostic scene graph produced by the renderer, with SVG serialization.

use std::fmt::Write as _;

use skia_safe as skia;

use crate::geometry::{path_contains, PathCmd, Point, RectF};
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Filled band for one series; the hover target.
    Area { series: Series, path: Vec<PathCmd>, fill: skia::Color, opacity: f32 },
    Rect { rect: RectF, fill: skia::Color, stroke: Option<skia::Color>, radius: f32 },
    Line { from: Point, to: Point, color: skia::Color, width: f32 },
    /// `pos` is the baseline point the anchor refers to.
    Text { pos: Point, text: String, size: f32, color: skia::Color, anchor: Anchor },
}

impl Node {
    /// Copy shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Node {
        let mv = |p: Point| Point::new(p.x + dx, p.y + dy);
        match self {
            Node::Area { series, path, fill, opacity } => Node::Area {
                series: *series,
                path: path
                    .iter()
                    .map(|c| match *c {
                        PathCmd::MoveTo(p) => PathCmd::MoveTo(mv(p)),
                        PathCmd::LineTo(p) => PathCmd::LineTo(mv(p)),
                        PathCmd::CubicTo(a, b, p) => PathCmd::CubicTo(mv(a), mv(b), mv(p)),
                        PathCmd::Close => PathCmd::Close,
                    })
                    .collect(),
                fill: *fill,
                opacity: *opacity,
            },
            Node::Rect { rect, fill, stroke, radius } => Node::Rect {
                rect: RectF::from_ltwh(rect.left + dx, rect.top + dy, rect.width(), rect.height()),
                fill: *fill,
                stroke: *stroke,
                radius: *radius,
            },
            Node::Line { from, to, color, width } => {
                Node::Line { from: mv(*from), to: mv(*to), color: *color, width: *width }
            }
            Node::Text { pos, text, size, color, anchor } => Node::Text {
                pos: mv(*pos),
                text: text.clone(),
                size: *size,
                color: *color,
                anchor: *anchor,
            },
        }
    }
}

/// A complete drawing. Every render produces a fresh one; nothing is patched in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: Option<skia::Color>,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: i32, height: i32, background: Option<skia::Color>) -> Self {
        Self { width, height, background, nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn areas(&self) -> impl Iterator<Item = (Series, &[PathCmd])> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Area { series, path, .. } => Some((*series, path.as_slice())),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Topmost series band under `(x, y)`, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<Series> {
        let p = Point::new(x, y);
        self.nodes.iter().rev().find_map(|n| match n {
            Node::Area { series, path, .. } if path_contains(path, p) => Some(*series),
            _ => None,
        })
    }

    pub fn to_svg(&self) -> String {
        let mut s = String::new();
        let _ = write!(
            s,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if let Some(bg) = self.background {
            let _ = write!(s, r#"<rect width="100%" height="100%" fill="{}"/>"#, css_color(bg));
        }
        for node in &self.nodes {
            match node {
                Node::Area { series, path, fill, opacity } => {
                    let _ = write!(
                        s,
                        r#"<path data-series="{}" d="{}" fill="{}" opacity="{}"/>"#,
                        escape(series.display_name()),
                        svg_path(path),
                        css_color(*fill),
                        opacity
                    );
                }
                Node::Rect { rect, fill, stroke, radius } => {
                    let _ = write!(
                        s,
                        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}""#,
                        rect.left,
                        rect.top,
                        rect.width(),
                        rect.height(),
                        radius,
                        css_color(*fill)
                    );
                    if let Some(c) = stroke {
                        let _ = write!(s, r#" stroke="{}""#, css_color(*c));
                    }
                    s.push_str("/>");
                }
                Node::Line { from, to, color, width } => {
                    let _ = write!(
                        s,
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                        from.x,
                        from.y,
                        to.x,
                        to.y,
                        css_color(*color),
                        width
                    );
                }
                Node::Text { pos, text, size, color, anchor } => {
                    let anchor = match anchor {
                        Anchor::Start => "start",
                        Anchor::Middle => "middle",
                        Anchor::End => "end",
                    };
                    let _ = write!(
                        s,
                        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
                        pos.x,
                        pos.y,
                        size,
                        css_color(*color),
                        anchor,
                        escape(text)
                    );
                }
            }
        }
        s.push_str("</svg>");
        s
    }
}

fn css_color(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    } else {
        format!("rgba({},{},{},{:.3})", c.r(), c.g(), c.b(), c.a() as f32 / 255.0)
    }
}

fn svg_path(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        let _ = match cmd {
            PathCmd::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
            PathCmd::LineTo(p) => write!(d, "L{},{}", p.x, p.y),
            PathCmd::CubicTo(a, b, p) => write!(d, "C{},{},{},{},{},{}", a.x, a.y, b.x, b.y, p.x, p.y),
            PathCmd::Close => write!(d, "Z"),
        };
    }
    d
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
