use std::collections::BTreeMap;

use crate::animation::Scheduler;
use crate::domain::settings::SimulationSettings;
use crate::rigid_body_system::{BodySystem, ResolveReport};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(settings: SimulationSettings) -> WorldCore {
    WorldCore {
        bodies: BodySystem::new(),
        scheduler: Scheduler::new(),
        animations: BTreeMap::new(),
        settings,
        frame: 0,
        last_report: ResolveReport::default(),
        rejected_changes: 0,
        next_animation_serial: 1,
        perf_stats: PerfStats::default(),
        // Grown on demand by `extract_outlines`
        outline_buffer: Vec::with_capacity(256),
        outline_counts: Vec::with_capacity(32),
    }
}
