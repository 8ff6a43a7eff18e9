//! World - tick-driven hit-box simulation
//!
//! `WorldCore` only orchestrates; the per-concern work lives in the
//! submodules:
//! - step: timed mutation, body update, collision resolution
//! - commands: spawning, removal, input and scheduled changes
//! - render: flat outline buffers for the JS renderer
//! - init: construction and settings

use std::collections::BTreeMap;

use crate::animation::{Animation, AnimationPlayer, ChangeSet, Scheduler};
use crate::domain::error::{SceneError, WorldError};
use crate::domain::scene::BodyDesc;
use crate::domain::settings::SimulationSettings;
use crate::rigid_body::{Body, BodyId, Direction};
use crate::rigid_body_system::{BodySystem, ResolveReport};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bodies: BodySystem,
    scheduler: Scheduler,
    animations: BTreeMap<BodyId, AnimationPlayer>,

    // Settings
    settings: SimulationSettings,

    // State
    frame: u64,
    last_report: ResolveReport,
    rejected_changes: u32,
    next_animation_serial: u64,

    // Perf metrics
    perf_stats: PerfStats,

    // Render transfer buffers
    outline_buffer: Vec<f32>,
    outline_counts: Vec<u32>,
}

impl WorldCore {
    /// Create an empty world with default settings
    pub fn new() -> Self {
        init::create_world_core(SimulationSettings::default())
    }

    pub fn with_settings(settings: SimulationSettings) -> Self {
        init::create_world_core(settings)
    }

    /// Replace every body and pending change with the contents of a scene
    /// bundle. On error the world is left as it was.
    pub fn load_scene_json(&mut self, json: &str) -> Result<Vec<BodyId>, SceneError> {
        commands::load_scene_json(self, json)
    }

    /// Scene bundle of the current settings and bodies
    pub fn scene_json(&self) -> Result<String, SceneError> {
        commands::scene_json(self)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.bodies.body_count() }

    pub fn active_body_count(&self) -> usize { self.bodies.active_count() }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn bodies(&self) -> &[Body] {
        self.bodies.bodies()
    }

    pub fn pending_events(&self) -> usize {
        self.scheduler.len()
    }

    /// Resolution counters of the last step
    pub fn last_report(&self) -> &ResolveReport {
        &self.last_report
    }

    /// Change-sets rejected since the world was created or cleared
    pub fn rejected_changes(&self) -> u32 {
        self.rejected_changes
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_penetration_epsilon(&mut self, epsilon: f64) -> Result<(), WorldError> {
        settings::set_penetration_epsilon(self, epsilon)
    }

    pub fn set_parallel_geometry(&mut self, enabled: bool) {
        settings::set_parallel_geometry(self, enabled);
    }

    // === BODY API ===

    pub fn spawn_body(&mut self, desc: &BodyDesc) -> Result<BodyId, WorldError> {
        commands::spawn_body(self, desc)
    }

    /// Spawn a body whose hit-box is its `w` x `h` rectangle
    pub fn spawn_rect(&mut self, x: f64, y: f64, w: f64, h: f64, weight: f64) -> Result<BodyId, WorldError> {
        commands::spawn_rect(self, x, y, w, h, weight)
    }

    /// Remove a body along with its animation and pending changes
    pub fn remove_body(&mut self, id: BodyId) -> Result<(), WorldError> {
        commands::remove_body(self, id)
    }

    /// Remove all bodies, animations and scheduled changes
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn set_pressed(&mut self, id: BodyId, dir: Direction, pressed: bool) -> Result<(), WorldError> {
        commands::set_pressed(self, id, dir, pressed)
    }

    pub fn set_angle(&mut self, id: BodyId, degrees: f64) -> Result<(), WorldError> {
        commands::set_angle(self, id, degrees)
    }

    pub fn set_position(&mut self, id: BodyId, x: f64, y: f64) -> Result<(), WorldError> {
        commands::set_position(self, id, x, y)
    }

    pub fn set_active(&mut self, id: BodyId, active: bool) -> Result<(), WorldError> {
        commands::set_active(self, id, active)
    }

    /// Apply `change` to body `id` once `delay` ticks have passed
    pub fn schedule_change(&mut self, id: BodyId, delay: u32, change: ChangeSet) -> Result<(), WorldError> {
        commands::schedule_change(self, id, delay, change)
    }

    /// Start (or replace) the animation of body `id`
    pub fn set_animation(&mut self, id: BodyId, animation: Animation) -> Result<(), WorldError> {
        commands::set_animation(self, id, animation)
    }

    pub fn stop_animation(&mut self, id: BodyId) -> bool {
        commands::stop_animation(self, id)
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === RENDER API ===

    /// Fill the outline buffers; returns the number of outlines written
    pub fn extract_outlines(&mut self) -> usize {
        render_extract::extract_outlines(self)
    }

    /// Flat `x, y` pairs of every extracted outline
    pub fn outline_vertices(&self) -> &[f32] {
        &self.outline_buffer
    }

    /// Vertex count of each extracted outline
    pub fn outline_counts(&self) -> &[u32] {
        &self.outline_counts
    }

    pub fn outline_vertices_ptr(&self) -> *const f32 {
        self.outline_buffer.as_ptr()
    }

    pub fn outline_counts_ptr(&self) -> *const u32 {
        self.outline_counts.as_ptr()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
