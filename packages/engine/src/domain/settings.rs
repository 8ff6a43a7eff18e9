use serde::{Deserialize, Serialize};

use crate::collision::PENETRATION_EPSILON;

/// Tunables for a simulation world. Every field has a default, so a
/// partial JSON object is enough.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    /// Bias added to SAT penetration depths
    pub penetration_epsilon: f64,
    /// Collect per-step timings and counters
    pub perf_enabled: bool,
    /// Run per-body geometry updates on the rayon pool (needs the
    /// `parallel` feature)
    pub parallel_geometry: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            penetration_epsilon: PENETRATION_EPSILON,
            perf_enabled: false,
            parallel_geometry: true,
        }
    }
}

impl SimulationSettings {
    /// First field outside its allowed range, if any
    pub fn invalid_field(&self) -> Option<(&'static str, f64)> {
        let eps = self.penetration_epsilon;
        (!eps.is_finite() || eps < 0.0).then_some(("penetration_epsilon", eps))
    }
}
