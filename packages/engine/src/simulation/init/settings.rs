use crate::domain::error::WorldError;
use crate::domain::settings::SimulationSettings;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.settings.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_penetration_epsilon(world: &mut WorldCore, epsilon: f64) -> Result<(), WorldError> {
    let candidate = SimulationSettings { penetration_epsilon: epsilon, ..world.settings };
    if let Some((name, value)) = candidate.invalid_field() {
        return Err(WorldError::InvalidSetting { name, value });
    }
    world.settings = candidate;
    Ok(())
}

pub(super) fn set_parallel_geometry(world: &mut WorldCore, enabled: bool) {
    world.settings.parallel_geometry = enabled;
}
