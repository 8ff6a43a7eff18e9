use crate::collision::{boxes_overlap, collide_with_epsilon, CollisionResult, PENETRATION_EPSILON};
use crate::domain::error::ResolveError;
use crate::rigid_body::Body;

/// Counters from one resolution sweep
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolveReport {
    pub pairs_tested: u32,
    pub broad_phase_hits: u32,
    pub collisions: u32,
    /// Pairs that collided but could not be separated
    pub errors: Vec<ResolveError>,
}

/// Fraction of the separation each body of a pair absorbs.
///
/// Shares are proportional to each body's own weight.
pub fn separation_shares(a: &Body, b: &Body) -> Result<(f64, f64), ResolveError> {
    let total = a.weight() + b.weight();
    if total <= 0.0 {
        return Err(ResolveError::ZeroTotalWeight { a: a.id, b: b.id });
    }
    Ok((a.weight() / total, b.weight() / total))
}

pub fn resolve_collisions(bodies: &mut [Body]) -> ResolveReport {
    resolve_collisions_with_epsilon(bodies, PENETRATION_EPSILON)
}

/// Single sweep over every unordered pair `(i, j)`, `i < j`.
///
/// Reads each body's cached bounds and world hit-box as left by the last
/// update; corrections applied earlier in the sweep move positions but do
/// not refresh those caches. A pair that fails to resolve is logged and
/// skipped without stopping the sweep.
pub fn resolve_collisions_with_epsilon(bodies: &mut [Body], epsilon: f64) -> ResolveReport {
    let mut report = ResolveReport::default();
    let n = bodies.len();

    for i in 0..n {
        if !bodies[i].active {
            continue;
        }
        for j in (i + 1)..n {
            if !bodies[j].active {
                continue;
            }
            report.pairs_tested += 1;

            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if !boxes_overlap(&a.bounds(), &b.bounds()) {
                continue;
            }
            report.broad_phase_hits += 1;

            let CollisionResult::Collision(v) = collide_with_epsilon(a.moved_hit_box(), b.moved_hit_box(), epsilon)
            else {
                continue;
            };
            report.collisions += 1;

            match separation_shares(a, b) {
                Ok((share_a, share_b)) => {
                    a.pos += v * share_a;
                    b.pos -= v * share_b;
                }
                Err(err) => {
                    log::warn!("skipping collision: {err}");
                    report.errors.push(err);
                }
            }
        }
    }

    log::trace!(
        "resolve: {} pairs, {} broad-phase hits, {} collisions, {} errors",
        report.pairs_tested,
        report.broad_phase_hits,
        report.collisions,
        report.errors.len()
    );
    report
}
