//! Hitbox Engine - rotatable convex hit-boxes with SAT collision in WASM
//!
//! Architecture:
//! - domain/     - Errors, settings and the JSON scene bundle
//! - systems/    - Geometry, collision, animation and the body system
//! - simulation/ - World orchestration and the JS facade

pub mod domain;
pub mod systems;
pub mod simulation;

pub mod world {
    pub use crate::simulation::*;
}

// Short paths for the systems
pub use systems::animation;
pub use systems::collision;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` records to the browser console at debug level.
/// Returns false when a logger was already installed, which is kept.
pub fn install_console_logger() -> bool {
    console_log::init_with_level(log::Level::Debug).is_ok()
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    if !install_console_logger() {
        log::debug!("logger already installed");
    }

    web_sys::console::log_1(&"Hitbox WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::error::{GeometryError, ResolveError, SceneError, WorldError};
pub use domain::scene::{BodyDesc, SceneBundle};
pub use domain::settings::SimulationSettings;
pub use simulation::{PerfStats, World, WorldCore};

// Direction indices for `World::set_pressed`
#[wasm_bindgen]
pub fn dir_up() -> u8 { rigid_body::Direction::Up as u8 }
#[wasm_bindgen]
pub fn dir_left() -> u8 { rigid_body::Direction::Left as u8 }
#[wasm_bindgen]
pub fn dir_down() -> u8 { rigid_body::Direction::Down as u8 }
#[wasm_bindgen]
pub fn dir_right() -> u8 { rigid_body::Direction::Right as u8 }
