use super::*;
use crate::animation::{movement_to_animation, AnimationFrame, FieldOp, ScalarField};
use crate::domain::error::{GeometryError, ResolveError};
use crate::rigid_body::{AnchorMode, Point};

fn world_with_pair(gap: f64) -> (WorldCore, BodyId, BodyId) {
    let mut world = WorldCore::new();
    let a = world.spawn_rect(0.0, 0.0, 10.0, 10.0, 1.0).unwrap();
    let b = world.spawn_rect(10.0 + gap, 0.0, 10.0, 10.0, 1.0).unwrap();
    (world, a, b)
}

#[test]
fn step_separates_overlapping_bodies() {
    let (mut world, a, b) = world_with_pair(-2.0);
    world.step();

    assert_eq!(world.frame(), 1);
    assert_eq!(world.last_report().collisions, 1);
    let pa = world.body(a).unwrap().pos;
    let pb = world.body(b).unwrap().pos;
    // Equal weights split the 2-unit overlap evenly.
    assert!((pa.x + 1.0).abs() < 1e-6, "{pa:?}");
    assert!((pb.x - 9.0).abs() < 1e-6, "{pb:?}");
}

#[test]
fn touching_edges_are_left_alone() {
    let (mut world, a, _) = world_with_pair(0.0);
    world.step();
    assert_eq!(world.last_report().broad_phase_hits, 0);
    assert_eq!(world.body(a).unwrap().pos, Point::zero());
}

#[test]
fn pressed_control_moves_body_before_resolution() {
    let (mut world, a, b) = world_with_pair(1.0);
    world.set_pressed(a, Direction::Right, true).unwrap();
    world.step();

    // Moved 1 unit into edge contact, which is not a collision.
    let report = world.last_report();
    assert_eq!(report.pairs_tested, 1);
    assert_eq!(report.broad_phase_hits, 0);
    assert_eq!(world.body(a).unwrap().pos, Point::new(1.0, 0.0));
    assert_eq!(world.body(a).unwrap().bounds().right(), world.body(b).unwrap().bounds().left());

    world.step();
    let report = world.last_report();
    assert_eq!(report.collisions, 1);
    let pa = world.body(a).unwrap().pos;
    let pb = world.body(b).unwrap().pos;
    assert!(pb.x - pa.x >= 10.0 - 1e-6, "{pa:?} {pb:?}");
}

#[test]
fn zero_weight_pair_is_skipped_and_the_sweep_continues() {
    let mut world = WorldCore::new();
    let ghost_a = world.spawn_rect(0.0, 0.0, 4.0, 4.0, 0.0).unwrap();
    let ghost_b = world.spawn_rect(2.0, 0.0, 4.0, 4.0, 0.0).unwrap();
    let c = world.spawn_rect(100.0, 0.0, 4.0, 4.0, 1.0).unwrap();
    let d = world.spawn_rect(102.0, 0.0, 4.0, 4.0, 3.0).unwrap();

    world.step();

    let report = world.last_report();
    assert_eq!(report.collisions, 2);
    assert_eq!(report.errors, vec![ResolveError::ZeroTotalWeight { a: ghost_a, b: ghost_b }]);
    assert_eq!(world.body(ghost_a).unwrap().pos, Point::new(0.0, 0.0));
    assert_eq!(world.body(ghost_b).unwrap().pos, Point::new(2.0, 0.0));
    // The heavier body moves three times as far.
    let dc = 100.0 - world.body(c).unwrap().pos.x;
    let dd = world.body(d).unwrap().pos.x - 102.0;
    assert!((dd - 3.0 * dc).abs() < 1e-6, "{dc} {dd}");
    assert_eq!(world.frame(), 1);
}

#[test]
fn inactive_bodies_are_not_moved_or_resolved() {
    let (mut world, a, b) = world_with_pair(-5.0);
    world.set_pressed(a, Direction::Down, true).unwrap();
    world.set_active(a, false).unwrap();
    world.step();

    assert_eq!(world.last_report().pairs_tested, 0);
    assert_eq!(world.body(a).unwrap().pos, Point::zero());
    assert_eq!(world.body(b).unwrap().pos, Point::new(5.0, 0.0));
}

#[test]
fn scheduled_change_fires_after_its_delay() {
    let mut world = WorldCore::new();
    let id = world.spawn_rect(0.0, 0.0, 2.0, 2.0, 1.0).unwrap();
    let change = ChangeSet::new().with_scalar(ScalarField::X, FieldOp::Replace, 50.0);
    world.schedule_change(id, 3, change).unwrap();

    world.step();
    world.step();
    assert_eq!(world.body(id).unwrap().pos.x, 0.0);
    assert_eq!(world.pending_events(), 1);

    world.step();
    let body = world.body(id).unwrap();
    assert_eq!(body.pos.x, 50.0);
    // Applied before the update, so the cached geometry already follows.
    assert_eq!(body.bounds().min, Point::new(50.0, 0.0));
    assert_eq!(world.pending_events(), 0);
}

#[test]
fn rejected_change_leaves_body_untouched() {
    let mut world = WorldCore::new();
    let id = world.spawn_rect(1.0, 1.0, 2.0, 2.0, 1.0).unwrap();
    let change = ChangeSet::new()
        .with_scalar(ScalarField::Y, FieldOp::Add, 4.0)
        .with_scalar(ScalarField::Width, FieldOp::Multiply, 0.0);
    world.schedule_change(id, 1, change).unwrap();
    world.step();

    assert_eq!(world.rejected_changes(), 1);
    assert_eq!(world.body(id).unwrap().pos, Point::new(1.0, 1.0));
    assert_eq!(world.body(id).unwrap().width(), 2.0);
}

#[test]
fn animation_plays_one_move_per_tick_and_cycles() {
    let mut world = WorldCore::new();
    let id = world.spawn_rect(0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    let moves = [Point::new(1.0, 0.0), Point::new(2.0, 0.5)];
    let animation = movement_to_animation(&moves, ScalarField::X, ScalarField::Y, FieldOp::Add);
    world.set_animation(id, animation).unwrap();

    world.step();
    assert_eq!(world.body(id).unwrap().pos, Point::new(1.0, 0.0));
    world.step();
    assert_eq!(world.body(id).unwrap().pos, Point::new(3.0, 0.5));
    world.step();
    assert_eq!(world.body(id).unwrap().pos, Point::new(4.0, 0.5));
}

#[test]
fn animation_frame_waits_for_its_after_change() {
    let mut world = WorldCore::new();
    let id = world.spawn_rect(0.0, 0.0, 4.0, 4.0, 1.0).unwrap();
    let frame = AnimationFrame {
        ticks: 3,
        before: ChangeSet::new().with_scalar(ScalarField::Angle, FieldOp::Add, 90.0),
        after: ChangeSet::new().with_anchor(AnchorMode::Center),
    };
    world.set_animation(id, Animation::new(vec![frame])).unwrap();

    world.step();
    assert_eq!(world.body(id).unwrap().angle, 90.0);
    world.step();
    world.step();
    assert_eq!(world.body(id).unwrap().anchor, AnchorMode::Origin);
    world.step();
    let body = world.body(id).unwrap();
    assert_eq!(body.anchor, AnchorMode::Center);
    // The after change resumed the player, which started the frame again.
    assert_eq!(body.angle, 180.0);
}

#[test]
fn replaced_animation_ignores_the_old_after_change() {
    let mut world = WorldCore::new();
    let id = world.spawn_rect(0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    let old = AnimationFrame {
        ticks: 2,
        before: ChangeSet::new().with_scalar(ScalarField::Y, FieldOp::Add, 1.0),
        after: ChangeSet::new().with_scalar(ScalarField::Weight, FieldOp::Replace, 5.0),
    };
    world.set_animation(id, Animation::new(vec![old])).unwrap();
    world.step();

    let new = AnimationFrame {
        ticks: 10,
        before: ChangeSet::new().with_scalar(ScalarField::X, FieldOp::Add, 1.0),
        after: ChangeSet::new(),
    };
    world.set_animation(id, Animation::new(vec![new])).unwrap();
    for _ in 0..4 {
        world.step();
    }

    let body = world.body(id).unwrap();
    // The old after change still lands, but the 10-tick frame keeps running.
    assert_eq!(body.weight(), 5.0);
    assert_eq!(body.pos, Point::new(1.0, 1.0));
}

#[test]
fn removing_a_body_cancels_its_pending_changes() {
    let mut world = WorldCore::new();
    let id = world.spawn_rect(0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    let keep = world.spawn_rect(5.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    world.schedule_change(id, 4, ChangeSet::new().with_scalar(ScalarField::X, FieldOp::Add, 1.0)).unwrap();
    world.schedule_change(keep, 4, ChangeSet::new().with_scalar(ScalarField::X, FieldOp::Add, 1.0)).unwrap();
    world.set_animation(id, Animation::default()).unwrap();

    world.remove_body(id).unwrap();
    assert_eq!(world.pending_events(), 1);
    assert_eq!(world.remove_body(id), Err(WorldError::UnknownBody(id)));
    assert!(!world.stop_animation(id));
    assert_eq!(world.schedule_change(id, 1, ChangeSet::new()), Err(WorldError::UnknownBody(id)));
}

#[test]
fn commands_validate_their_input() {
    let mut world = WorldCore::new();
    let id = world.spawn_rect(0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    assert!(matches!(
        world.set_angle(id, f64::NAN),
        Err(WorldError::Geometry(GeometryError::NonFinite { field: "angle", .. }))
    ));
    assert_eq!(
        world.spawn_rect(0.0, 0.0, 1.0, 1.0, -2.0),
        Err(WorldError::Geometry(GeometryError::InvalidWeight(-2.0)))
    );
    assert_eq!(world.set_pressed(99, Direction::Up, true), Err(WorldError::UnknownBody(99)));
    let err = world.set_penetration_epsilon(-1.0).unwrap_err();
    assert_eq!(err, WorldError::InvalidSetting { name: "penetration_epsilon", value: -1.0 });
    assert_eq!(err.to_string(), "penetration_epsilon must be finite and non-negative, got -1");
    assert!(world.set_penetration_epsilon(f64::NAN).is_err());
    world.set_penetration_epsilon(0.0).unwrap();
    assert_eq!(world.settings().penetration_epsilon, 0.0);
    assert_eq!(world.body_count(), 1);
}

#[test]
fn failed_scene_load_keeps_the_current_world() {
    let mut world = WorldCore::new();
    world.spawn_rect(0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    let bad = r#"{"bodies":[{"x":0,"y":0,"width":1,"height":1,"weight":-1}]}"#;
    assert!(world.load_scene_json(bad).is_err());
    assert_eq!(world.body_count(), 1);

    let ids = world
        .load_scene_json(r#"{"settings":{"parallelGeometry":false},"bodies":[{"x":3,"y":4,"width":2,"height":2}]}"#)
        .unwrap();
    assert_eq!(ids, vec![1]);
    assert!(!world.settings().parallel_geometry);
    assert_eq!(world.body(1).unwrap().pos, Point::new(3.0, 4.0));
}

#[test]
fn scene_json_round_trips_bodies() {
    let mut world = WorldCore::new();
    let id = world.spawn_rect(2.0, 3.0, 4.0, 6.0, 2.0).unwrap();
    world.set_angle(id, 45.0).unwrap();
    world.step();
    let json = world.scene_json().unwrap();

    let mut copy = WorldCore::new();
    copy.load_scene_json(&json).unwrap();
    assert_eq!(copy.body(1).unwrap().moved_hit_box(), world.body(id).unwrap().moved_hit_box());
}

#[test]
fn extract_outlines_packs_active_hit_boxes() {
    let mut world = WorldCore::new();
    world.spawn_rect(1.0, 2.0, 3.0, 4.0, 1.0).unwrap();
    let hidden = world.spawn_rect(50.0, 50.0, 1.0, 1.0, 1.0).unwrap();
    world
        .spawn_body(&BodyDesc {
            x: 10.0,
            y: 0.0,
            width: 2.0,
            height: 2.0,
            angle: 0.0,
            anchor: AnchorMode::Origin,
            weight: 1.0,
            hit_box: Some(vec![[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]]),
            speed: None,
        })
        .unwrap();
    world.set_active(hidden, false).unwrap();

    assert_eq!(world.extract_outlines(), 2);
    assert_eq!(world.outline_counts(), &[4, 3]);
    assert_eq!(
        world.outline_vertices(),
        &[1.0, 2.0, 4.0, 2.0, 4.0, 6.0, 1.0, 6.0, 10.0, 0.0, 12.0, 0.0, 11.0, 2.0]
    );
}

#[test]
fn perf_stats_only_when_enabled() {
    let (mut world, _, _) = world_with_pair(-1.0);
    world.step();
    assert_eq!(world.get_perf_stats(), PerfStats::default());

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.body_count(), 2);
    assert_eq!(stats.pairs_tested(), 1);
    assert!(stats.step_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats(), PerfStats::default());
}

#[test]
fn clear_resets_ids_and_state() {
    let (mut world, _, _) = world_with_pair(-1.0);
    world.step();
    world.clear();
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.spawn_rect(0.0, 0.0, 1.0, 1.0, 1.0), Ok(1));
}
