//! Movement paths: turn key points into per-tick displacements and those
//! into animations.

use serde::{Deserialize, Serialize};

use crate::rigid_body::Point;

use super::bezier;
use super::change::{FieldOp, ScalarField};
use super::player::{Animation, AnimationFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Line,
    Bezier,
}

/// Differences between consecutive points.
///
/// `[(0,0), (10,30), (0,20)]` becomes `[(10,30), (-10,-10)]`.
pub fn global_points_to_local_movement(points: &[Point]) -> Vec<Point> {
    points.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Stretch each move over `t / moves.len()` ticks (at least one).
pub fn extend_linear_movement(moves: &[Point], t: usize) -> Vec<Point> {
    if moves.is_empty() {
        return Vec::new();
    }
    let time = (t / moves.len()).max(1);
    let scale = 1.0 / time as f64;
    moves
        .iter()
        .flat_map(|&m| std::iter::repeat(m * scale).take(time))
        .collect()
}

/// Per-tick displacements that follow `key_points` over roughly `t` ticks.
///
/// `Line` walks straight between key points. `Bezier` treats them as
/// control points and samples the curve at `0, 1/t, .., (t-1)/t`.
pub fn calculate_movement_points(t: usize, key_points: &[Point], kind: CurveKind) -> Vec<Point> {
    match kind {
        CurveKind::Line => extend_linear_movement(&global_points_to_local_movement(key_points), t),
        CurveKind::Bezier => {
            if t == 0 {
                return Vec::new();
            }
            let ts: Vec<f64> = (0..t).map(|i| i as f64 / t as f64).collect();
            match bezier::curve(&ts, key_points) {
                Some(samples) => global_points_to_local_movement(&samples),
                None => Vec::new(),
            }
        }
    }
}

/// One single-tick frame per move, writing `x_field`/`y_field` with `op`.
pub fn movement_to_animation(
    moves: &[Point],
    x_field: ScalarField,
    y_field: ScalarField,
    op: FieldOp,
) -> Animation {
    merge_movement(Animation::default(), moves, x_field, y_field, op)
}

/// Fold move `i` into the `before` change of frame `i` of `base`.
///
/// Missing frames are appended as empty single-tick frames; frames past
/// the last move are kept as they are. Fields the frame already changes
/// are combined with `op`, so a second path layered on the first adds up.
pub fn merge_movement(
    base: Animation,
    moves: &[Point],
    x_field: ScalarField,
    y_field: ScalarField,
    op: FieldOp,
) -> Animation {
    let mut frames = base.into_frames();
    if frames.len() < moves.len() {
        frames.resize_with(moves.len(), || AnimationFrame { ticks: 1, ..Default::default() });
    }
    for (frame, m) in frames.iter_mut().zip(moves) {
        frame.before.combine_scalar(x_field, op, m.x);
        frame.before.combine_scalar(y_field, op, m.y);
    }
    Animation::new(frames)
}
