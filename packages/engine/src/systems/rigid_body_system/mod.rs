//! BodySystem - owns the live bodies and runs the per-frame passes
//!
//! Per tick:
//! - `update`: movement + cached geometry for every active body
//!   (independent per body, parallel with the `parallel` feature).
//! - `resolve`: one ordered O(n^2) sweep of broad phase, SAT narrow phase
//!   and weighted positional correction. Single pass, not iterated.

mod resolve;
mod system;

pub use resolve::{resolve_collisions, resolve_collisions_with_epsilon, separation_shares, ResolveReport};
pub use system::BodySystem;
