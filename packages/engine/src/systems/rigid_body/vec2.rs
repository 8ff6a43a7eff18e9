/// 2D point / displacement used for every hit-box vertex
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Counter-clockwise perpendicular `(-y, x)`
    pub fn perp(&self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance (hypotenuse) to another point
    pub fn distance(&self, other: Point) -> f64 {
        (other - *self).length()
    }

    /// Polar angle of `other` seen from `self`, in radians.
    ///
    /// Coincident points have no direction; the angle is defined as 0.
    pub fn angle_to(&self, other: Point) -> f64 {
        let d = other - *self;
        if d.x == 0.0 && d.y == 0.0 {
            0.0
        } else {
            d.y.atan2(d.x)
        }
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Rotate every point around `anchor` by `radians`.
///
/// Each point goes through polar coordinates relative to the anchor
/// (`angle_to` + `distance`), gets `radians` added to its angle and is
/// rebuilt from `cos`/`sin`. A point sitting on the anchor stays put.
///
/// Whole turns return the points unchanged; the trigonometric round trip
/// would otherwise move axis-aligned vertices by a few ulps.
pub fn rotate_points_around_point(anchor: Point, points: &[Point], radians: f64) -> Vec<Point> {
    if radians.rem_euclid(std::f64::consts::TAU) == 0.0 {
        return points.to_vec();
    }
    points
        .iter()
        .map(|&p| {
            let distance = anchor.distance(p);
            let angle = anchor.angle_to(p) + radians;
            let (sin, cos) = angle.sin_cos();
            Point::new(anchor.x + distance * cos, anchor.y + distance * sin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < TOL && (a.y - b.y).abs() < TOL
    }

    #[test]
    fn angle_to_coincident_point_is_zero() {
        let p = Point::new(3.0, -2.0);
        assert_eq!(p.angle_to(p), 0.0);
        assert_eq!(Point::zero().angle_to(Point::new(0.0, 5.0)), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn quarter_turn_about_origin() {
        let out = rotate_points_around_point(Point::zero(), &[Point::new(1.0, 0.0)], std::f64::consts::FRAC_PI_2);
        assert!(close(out[0], Point::new(0.0, 1.0)), "{:?}", out[0]);
    }

    #[test]
    fn point_on_anchor_is_invariant() {
        let anchor = Point::new(5.0, 5.0);
        let out = rotate_points_around_point(anchor, &[anchor], 1.234);
        assert!(close(out[0], anchor));
    }

    #[test]
    fn whole_turns_are_exact() {
        let poly = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)];
        let anchor = Point::new(5.0, 5.0);
        assert_eq!(rotate_points_around_point(anchor, &poly, 0.0), poly.to_vec());
        assert_eq!(rotate_points_around_point(anchor, &poly, -0.0), poly.to_vec());
        assert_eq!(rotate_points_around_point(Point::zero(), &poly, std::f64::consts::TAU), poly.to_vec());
    }

    #[test]
    fn rotating_back_restores_vertices() {
        let anchor = Point::new(-7.5, 2.25);
        let poly = [
            Point::new(0.0, 0.0),
            Point::new(12.0, 1.0),
            Point::new(9.0, 14.0),
            Point::new(-3.0, 6.0),
        ];
        for theta in [0.1, 1.0, 2.5, -4.0, 7.0] {
            let there = rotate_points_around_point(anchor, &poly, theta);
            let back = rotate_points_around_point(anchor, &there, -theta);
            for (orig, got) in poly.iter().zip(back.iter()) {
                assert!(close(*orig, *got), "theta {theta}: {orig:?} vs {got:?}");
            }
        }
    }

    #[test]
    fn matches_rotation_matrix() {
        let theta: f64 = 0.7;
        let (s, c) = theta.sin_cos();
        let p = Point::new(4.0, -1.5);
        let out = rotate_points_around_point(Point::zero(), &[p], theta);
        assert!(close(out[0], Point::new(p.x * c - p.y * s, p.x * s + p.y * c)));
    }
}
