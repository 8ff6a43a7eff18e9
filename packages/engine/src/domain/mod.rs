//! Domain types that cross the engine boundary: errors, settings and
//! JSON scene bundles.

pub mod error;
pub mod scene;
pub mod settings;
