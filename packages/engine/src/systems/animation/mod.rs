//! Timed attribute mutation: change-sets, the countdown scheduler and
//! cyclic animations built on top of it.

pub mod bezier;
pub mod change;
pub mod path;
mod player;
mod schedule;

pub use change::{
    combine_broadcast, combine_elementwise, combine_scalar, ChangeSet, FieldOp, ScalarChange, ScalarField,
    VectorChange, VectorValue,
};
pub use path::{
    calculate_movement_points, extend_linear_movement, global_points_to_local_movement, merge_movement,
    movement_to_animation, CurveKind,
};
pub use player::{Animation, AnimationFrame, AnimationPlayer};
pub use schedule::{ScheduledEvent, Scheduler};
