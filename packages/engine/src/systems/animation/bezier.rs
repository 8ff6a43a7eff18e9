use crate::rigid_body::Point;

fn lerp(t: f64, a: Point, b: Point) -> Point {
    a * (1.0 - t) + b * t
}

/// Point at `t` on the Bezier curve with the given control points
/// (de Casteljau). `None` for an empty control list.
pub fn point(t: f64, controls: &[Point]) -> Option<Point> {
    let mut level: Vec<Point> = controls.to_vec();
    while level.len() > 1 {
        level = level.windows(2).map(|w| lerp(t, w[0], w[1])).collect();
    }
    level.first().copied()
}

/// Sample the curve at every `t` in `ts`.
pub fn curve(ts: &[f64], controls: &[Point]) -> Option<Vec<Point>> {
    if controls.is_empty() {
        return None;
    }
    ts.iter().map(|&t| point(t, controls)).collect()
}
