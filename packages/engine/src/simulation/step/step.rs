use crate::animation::{ChangeSet, ScheduledEvent};
use crate::rigid_body::BodyId;
use crate::rigid_body_system::BodySystem;

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.settings.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.body_count() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === TIMED MUTATION ===
    let t0 = PerfTimer::start_if(perf_on);
    let fired = run_timed_mutation(world);
    if let Some(t0) = t0 {
        world.perf_stats.events_ms = t0.elapsed_ms();
        world.perf_stats.events_fired = fired as u32;
    }

    // === BODY UPDATE ===
    // Movement first, then rotate, translate and bound every active body
    let t0 = PerfTimer::start_if(perf_on);
    world.bodies.update(world.settings.parallel_geometry);
    if let Some(t0) = t0 {
        world.perf_stats.update_ms = t0.elapsed_ms();
    }

    // === COLLISION RESOLUTION ===
    let t0 = PerfTimer::start_if(perf_on);
    world.last_report = world.bodies.resolve(world.settings.penetration_epsilon);
    if let Some(t0) = t0 {
        world.perf_stats.resolve_ms = t0.elapsed_ms();
        world.perf_stats.pairs_tested = world.last_report.pairs_tested;
        world.perf_stats.broad_phase_hits = world.last_report.broad_phase_hits;
        world.perf_stats.collisions = world.last_report.collisions;
        world.perf_stats.resolve_errors = world.last_report.errors.len() as u32;
    }

    world.frame += 1;

    if let Some(t) = step_start {
        world.perf_stats.step_ms = t.elapsed_ms();
        world.perf_stats.changes_rejected = world.rejected_changes;
        world.perf_stats.pending_events = world.scheduler.len() as u32;
    }
    log::trace!(
        "frame {}: {} bodies, {} collisions",
        world.frame,
        world.bodies.body_count(),
        world.last_report.collisions
    );
}

/// Fire due scheduled events, then start every ready animation frame.
/// Returns the number of events fired.
fn run_timed_mutation(world: &mut WorldCore) -> usize {
    let due = world.scheduler.tick();
    let fired = due.len();
    for event in due {
        apply_change(&mut world.bodies, &mut world.rejected_changes, event.body, &event.change);
        let Some(serial) = event.resumes_animation else {
            continue;
        };
        match world.animations.get_mut(&event.body) {
            Some(player) if player.serial() == serial => player.resume(),
            _ => log::trace!("stale animation event for body {}", event.body),
        }
    }

    for (&id, player) in world.animations.iter_mut() {
        let Some(frame) = player.start_next() else {
            continue;
        };
        apply_change(&mut world.bodies, &mut world.rejected_changes, id, &frame.before);
        world.scheduler.schedule(
            frame.ticks,
            ScheduledEvent { body: id, change: frame.after, resumes_animation: Some(player.serial()) },
        );
    }
    fired
}

fn apply_change(bodies: &mut BodySystem, rejected: &mut u32, id: BodyId, change: &ChangeSet) {
    if change.is_empty() {
        return;
    }
    let Some(body) = bodies.get_mut(id) else {
        log::debug!("dropping change for missing body {id}");
        return;
    };
    if let Err(err) = body.apply_change(change) {
        *rejected = rejected.saturating_add(1);
        log::warn!("rejected change for body {id}: {err}");
    }
}
