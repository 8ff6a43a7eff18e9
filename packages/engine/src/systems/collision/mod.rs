//! Collision detection: bounding-box broad phase and SAT narrow phase.

pub mod bounds;
pub mod sat;

pub use bounds::{bounding_box, boxes_overlap, BoundingBox};
pub use sat::{collide, collide_with_epsilon, CollisionResult, PENETRATION_EPSILON};
