//! Body - a collidable game object with a rotatable convex hit-box
//!
//! The body stores its hit-box in local coordinates and derives the
//! world-space hit-box from its position, angle and rotation anchor.

mod body;
mod controls;
mod polygon;
mod vec2;

pub use body::{rotate_hit_box, AnchorMode, Body, BodyId};
pub use controls::{Controls, Direction};
pub use polygon::Polygon;
pub use vec2::{rotate_points_around_point, Point};
