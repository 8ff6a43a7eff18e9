use wasm_bindgen::prelude::*;

use crate::animation::{Animation, ChangeSet};
use crate::domain::scene::BodyDesc;
use crate::rigid_body::Direction;

use super::perf_stats::PerfStats;
use super::WorldCore;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Where the last `extract_outlines` call left its data in wasm memory
#[wasm_bindgen]
pub struct OutlineLayout {
    vertices_ptr: u32,
    vertices_len_elements: u32,
    vertices_len_bytes: u32,
    counts_ptr: u32,
    counts_len_elements: u32,
    counts_len_bytes: u32,
}

#[wasm_bindgen]
impl OutlineLayout {
    #[wasm_bindgen(getter)]
    pub fn vertices_ptr(&self) -> u32 { self.vertices_ptr }
    #[wasm_bindgen(getter)]
    pub fn vertices_len_elements(&self) -> u32 { self.vertices_len_elements }
    #[wasm_bindgen(getter)]
    pub fn vertices_len_bytes(&self) -> u32 { self.vertices_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn counts_ptr(&self) -> u32 { self.counts_ptr }
    #[wasm_bindgen(getter)]
    pub fn counts_len_elements(&self) -> u32 { self.counts_len_elements }
    #[wasm_bindgen(getter)]
    pub fn counts_len_bytes(&self) -> u32 { self.counts_len_bytes }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn pending_events(&self) -> usize { self.core.pending_events() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_penetration_epsilon(&mut self, epsilon: f64) -> Result<(), JsValue> {
        self.core.set_penetration_epsilon(epsilon).map_err(js_err)
    }

    pub fn set_parallel_geometry(&mut self, enabled: bool) {
        self.core.set_parallel_geometry(enabled);
    }

    /// Replace the world with a JSON scene bundle; returns the new body IDs
    pub fn load_scene(&mut self, json: String) -> Result<Vec<u32>, JsValue> {
        self.core.load_scene_json(&json).map_err(js_err)
    }

    pub fn scene_json(&self) -> Result<String, JsValue> {
        self.core.scene_json().map_err(js_err)
    }

    /// Remove all bodies, animations and scheduled changes
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === BODY API ===

    /// Spawn a body from a JSON body description
    /// Returns the body ID
    pub fn spawn_body(&mut self, json: String) -> Result<u32, JsValue> {
        let desc: BodyDesc = serde_json::from_str(&json).map_err(js_err)?;
        self.core.spawn_body(&desc).map_err(js_err)
    }

    /// Spawn a rectangular body at (x, y) with size (w, h)
    /// Returns the body ID
    pub fn spawn_rect(&mut self, x: f64, y: f64, w: f64, h: f64, weight: f64) -> Result<u32, JsValue> {
        self.core.spawn_rect(x, y, w, h, weight).map_err(js_err)
    }

    pub fn remove_body(&mut self, id: u32) -> Result<(), JsValue> {
        self.core.remove_body(id).map_err(js_err)
    }

    /// `dir`: 0 = up, 1 = left, 2 = down, 3 = right
    pub fn set_pressed(&mut self, id: u32, dir: u8, pressed: bool) -> Result<(), JsValue> {
        let dir = Direction::from_index(dir).ok_or_else(|| JsValue::from_str("direction must be 0..=3"))?;
        self.core.set_pressed(id, dir, pressed).map_err(js_err)
    }

    /// Degrees
    pub fn set_angle(&mut self, id: u32, degrees: f64) -> Result<(), JsValue> {
        self.core.set_angle(id, degrees).map_err(js_err)
    }

    pub fn set_position(&mut self, id: u32, x: f64, y: f64) -> Result<(), JsValue> {
        self.core.set_position(id, x, y).map_err(js_err)
    }

    pub fn set_active(&mut self, id: u32, active: bool) -> Result<(), JsValue> {
        self.core.set_active(id, active).map_err(js_err)
    }

    /// Apply a JSON change-set to body `id` after `delay` ticks
    pub fn schedule_change(&mut self, id: u32, delay: u32, json: String) -> Result<(), JsValue> {
        let change: ChangeSet = serde_json::from_str(&json).map_err(js_err)?;
        self.core.schedule_change(id, delay, change).map_err(js_err)
    }

    /// Start (or replace) the animation of body `id` from a JSON frame list
    pub fn set_animation(&mut self, id: u32, json: String) -> Result<(), JsValue> {
        let animation: Animation = serde_json::from_str(&json).map_err(js_err)?;
        self.core.set_animation(id, animation).map_err(js_err)
    }

    pub fn stop_animation(&mut self, id: u32) -> bool {
        self.core.stop_animation(id)
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    // === RENDER API ===

    /// Copy active outlines into the transfer buffers
    /// Returns the number of outlines
    pub fn extract_outlines(&mut self) -> usize {
        self.core.extract_outlines()
    }

    /// Flat `x, y` pairs as a copied array (for callers not reading wasm memory)
    pub fn outline_vertices(&self) -> Vec<f32> {
        self.core.outline_vertices().to_vec()
    }

    pub fn outline_counts(&self) -> Vec<u32> {
        self.core.outline_counts().to_vec()
    }

    pub fn outline_layout(&self) -> OutlineLayout {
        let vertices = self.core.outline_vertices();
        let counts = self.core.outline_counts();
        OutlineLayout {
            vertices_ptr: self.core.outline_vertices_ptr() as u32,
            vertices_len_elements: vertices.len() as u32,
            vertices_len_bytes: std::mem::size_of_val(vertices) as u32,
            counts_ptr: self.core.outline_counts_ptr() as u32,
            counts_len_elements: counts.len() as u32,
            counts_len_bytes: std::mem::size_of_val(counts) as u32,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
