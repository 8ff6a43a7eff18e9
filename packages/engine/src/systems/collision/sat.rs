//! Separating Axis Theorem narrow phase.
//!
//! Both polygons are projected onto the perpendicular of every edge. A gap
//! on any axis proves the shapes are disjoint. Otherwise every axis yields
//! a candidate push vector and the shortest one is the minimum penetration
//! vector (MPV), oriented to move the first polygon away from the second.

use crate::rigid_body::{Point, Polygon};

/// Bias added to every normalized depth so exact contact still produces a
/// non-zero push and bodies do not flicker in and out of contact.
pub const PENETRATION_EPSILON: f64 = 1e-9;

/// Below this squared length an edge is treated as zero-length.
const DEGENERATE_AXIS_LEN_SQ: f64 = 1e-18;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CollisionResult {
    NoCollision,
    /// Displacement to apply to the first polygon to clear the second.
    Collision(Point),
}

impl CollisionResult {
    pub fn is_collision(&self) -> bool {
        matches!(self, CollisionResult::Collision(_))
    }

    pub fn vector(&self) -> Option<Point> {
        match *self {
            CollisionResult::Collision(v) => Some(v),
            CollisionResult::NoCollision => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Projection {
    min: f64,
    max: f64,
}

fn project(points: &[Point], axis: Point) -> Projection {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        let d = p.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    Projection { min, max }
}

/// Test two convex polygons with the default epsilon.
pub fn collide(a: &Polygon, b: &Polygon) -> CollisionResult {
    collide_with_epsilon(a, b, PENETRATION_EPSILON)
}

pub fn collide_with_epsilon(a: &Polygon, b: &Polygon, epsilon: f64) -> CollisionResult {
    let pa = a.points();
    let pb = b.points();

    let mut best: Option<Point> = None;
    let mut best_len_sq = f64::INFINITY;

    for edge in a.edges().chain(b.edges()) {
        let axis = edge.perp();
        let axis_len_sq = axis.length_squared();

        let ja = project(pa, axis);
        let jb = project(pb, axis);
        if ja.max < jb.min || jb.max < ja.min {
            return CollisionResult::NoCollision;
        }

        // A zero-length edge projects everything onto 0; it can never
        // separate and has no direction to push along.
        if axis_len_sq < DEGENERATE_AXIS_LEN_SQ {
            continue;
        }

        let depth = (ja.max - jb.min).min(jb.max - ja.min);
        let candidate = axis * (depth / axis_len_sq + epsilon);
        let len_sq = candidate.length_squared();
        if len_sq < best_len_sq {
            best_len_sq = len_sq;
            best = Some(candidate);
        }
    }

    let Some(mut mpv) = best else {
        // Every axis was degenerate: nothing to separate along.
        return CollisionResult::NoCollision;
    };

    let towards_b = b.centroid() - a.centroid();
    if mpv.dot(towards_b) > 0.0 {
        mpv = -mpv;
    }
    CollisionResult::Collision(mpv)
}
