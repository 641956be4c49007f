// File: crates/stream-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and curve construction.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Path verbs in absolute pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// Append a cardinal spline through `pts` (tension 0) as cubic segments.
/// Assumes the pen already sits on `pts[0]`.
fn cardinal_segments(out: &mut Vec<PathCmd>, pts: &[Point], tension: f32) {
    let k = (1.0 - tension) / 6.0;
    match pts.len() {
        0 | 1 => {}
        2 => out.push(PathCmd::LineTo(pts[1])),
        n => {
            for i in 0..n - 1 {
                let p0 = pts[i.saturating_sub(1)];
                let p1 = pts[i];
                let p2 = pts[i + 1];
                let p3 = pts[(i + 2).min(n - 1)];
                let c1 = Point::new(p1.x + k * (p2.x - p0.x), p1.y + k * (p2.y - p0.y));
                let c2 = Point::new(p2.x - k * (p3.x - p1.x), p2.y - k * (p3.y - p1.y));
                out.push(PathCmd::CubicTo(c1, c2, p2));
            }
        }
    }
}

/// Closed area outline between a top edge and a bottom edge sampled at the same x.
///
/// Samples where any coordinate is non-finite are treated as undefined: they split the
/// area into independent runs and are never plotted. Each run is traced along `top`
/// left to right, then back along `bottom`, both as cardinal curves.
pub fn area_path(top: &[Point], bottom: &[Point], tension: f32) -> Vec<PathCmd> {
    let mut out = Vec::new();
    let n = top.len().min(bottom.len());
    let mut i = 0;
    while i < n {
        if !(top[i].is_finite() && bottom[i].is_finite()) {
            i += 1;
            continue;
        }
        let start = i;
        while i < n && top[i].is_finite() && bottom[i].is_finite() {
            i += 1;
        }
        let upper = &top[start..i];
        let lower: Vec<Point> = bottom[start..i].iter().rev().copied().collect();
        out.push(PathCmd::MoveTo(upper[0]));
        cardinal_segments(&mut out, upper, tension);
        out.push(PathCmd::LineTo(lower[0]));
        cardinal_segments(&mut out, &lower, tension);
        out.push(PathCmd::Close);
    }
    out
}

/// Even-odd point-in-polygon test against the flattened path.
pub fn path_contains(cmds: &[PathCmd], p: Point) -> bool {
    let mut inside = false;
    for ring in flatten(cmds) {
        let n = ring.len();
        if n < 3 { continue; }
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (ring[i], ring[j]);
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
    }
    inside
}

/// Approximate every subpath with line segments (cubics sampled at 8 steps).
pub fn flatten(cmds: &[PathCmd]) -> Vec<Vec<Point>> {
    const STEPS: usize = 8;
    let mut rings: Vec<Vec<Point>> = Vec::new();
    let mut cur: Vec<Point> = Vec::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => {
                if !cur.is_empty() { rings.push(std::mem::take(&mut cur)); }
                cur.push(p);
            }
            PathCmd::LineTo(p) => cur.push(p),
            PathCmd::CubicTo(c1, c2, p) => {
                let Some(&p0) = cur.last() else { cur.push(p); continue };
                for s in 1..=STEPS {
                    let t = s as f32 / STEPS as f32;
                    let u = 1.0 - t;
                    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
                    cur.push(Point::new(
                        a * p0.x + b * c1.x + c * c2.x + d * p.x,
                        a * p0.y + b * c1.y + c * c2.y + d * p.y,
                    ));
                }
            }
            PathCmd::Close => {
                if !cur.is_empty() { rings.push(std::mem::take(&mut cur)); }
            }
        }
    }
    if !cur.is_empty() { rings.push(cur); }
    rings
}
