//! Systems: geometry and bodies, collision, resolution, timed mutation

pub mod animation;
pub mod collision;
pub mod rigid_body;
pub mod rigid_body_system;
