use wasm_bindgen::prelude::*;

/// Timings and counters of the last step (all zero while perf is off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) events_ms: f64,
    pub(super) update_ms: f64,
    pub(super) resolve_ms: f64,
    pub(super) body_count: u32,
    pub(super) pairs_tested: u32,
    pub(super) broad_phase_hits: u32,
    pub(super) collisions: u32,
    pub(super) resolve_errors: u32,
    pub(super) events_fired: u32,
    pub(super) changes_rejected: u32,
    pub(super) pending_events: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn events_ms(&self) -> f64 { self.events_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn resolve_ms(&self) -> f64 { self.resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn broad_phase_hits(&self) -> u32 { self.broad_phase_hits }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn resolve_errors(&self) -> u32 { self.resolve_errors }
    #[wasm_bindgen(getter)]
    pub fn events_fired(&self) -> u32 { self.events_fired }
    #[wasm_bindgen(getter)]
    pub fn changes_rejected(&self) -> u32 { self.changes_rejected }
    #[wasm_bindgen(getter)]
    pub fn pending_events(&self) -> u32 { self.pending_events }
}
