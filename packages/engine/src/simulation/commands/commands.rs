use crate::animation::{Animation, AnimationPlayer, ChangeSet, ScheduledEvent};
use crate::domain::error::{SceneError, WorldError};
use crate::domain::scene::{BodyDesc, SceneBundle};
use crate::rigid_body::{Body, BodyId, Direction};

use super::WorldCore;

fn body_mut(world: &mut WorldCore, id: BodyId) -> Result<&mut Body, WorldError> {
    world.bodies.get_mut(id).ok_or(WorldError::UnknownBody(id))
}

pub(super) fn spawn_body(world: &mut WorldCore, desc: &BodyDesc) -> Result<BodyId, WorldError> {
    let body = desc.build()?;
    Ok(world.bodies.add_body(body))
}

pub(super) fn spawn_rect(
    world: &mut WorldCore,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    weight: f64,
) -> Result<BodyId, WorldError> {
    let body = Body::new_rect(x, y, w, h, weight)?;
    Ok(world.bodies.add_body(body))
}

pub(super) fn remove_body(world: &mut WorldCore, id: BodyId) -> Result<(), WorldError> {
    world.bodies.remove_body(id).ok_or(WorldError::UnknownBody(id))?;
    world.animations.remove(&id);
    let dropped = world.scheduler.cancel_body(id);
    if dropped > 0 {
        log::debug!("body {id} removed with {dropped} pending changes");
    }
    Ok(())
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.scheduler.clear();
    world.animations.clear();
    world.last_report = Default::default();
    world.rejected_changes = 0;
    world.frame = 0;
}

pub(super) fn set_pressed(world: &mut WorldCore, id: BodyId, dir: Direction, pressed: bool) -> Result<(), WorldError> {
    body_mut(world, id)?.controls.set_pressed(dir, pressed);
    Ok(())
}

pub(super) fn set_angle(world: &mut WorldCore, id: BodyId, degrees: f64) -> Result<(), WorldError> {
    body_mut(world, id)?.set_angle(degrees)?;
    Ok(())
}

pub(super) fn set_position(world: &mut WorldCore, id: BodyId, x: f64, y: f64) -> Result<(), WorldError> {
    body_mut(world, id)?.set_position(x, y)?;
    Ok(())
}

pub(super) fn set_active(world: &mut WorldCore, id: BodyId, active: bool) -> Result<(), WorldError> {
    body_mut(world, id)?.active = active;
    Ok(())
}

pub(super) fn schedule_change(world: &mut WorldCore, id: BodyId, delay: u32, change: ChangeSet) -> Result<(), WorldError> {
    if world.bodies.get(id).is_none() {
        return Err(WorldError::UnknownBody(id));
    }
    world.scheduler.schedule(delay, ScheduledEvent { body: id, change, resumes_animation: None });
    Ok(())
}

/// Replaces any running animation. An `after` change already scheduled by
/// the old animation still fires, but carries the old player's serial and
/// so no longer gates the new one.
pub(super) fn set_animation(world: &mut WorldCore, id: BodyId, animation: Animation) -> Result<(), WorldError> {
    if world.bodies.get(id).is_none() {
        return Err(WorldError::UnknownBody(id));
    }
    let serial = world.next_animation_serial;
    world.next_animation_serial += 1;
    world.animations.insert(id, AnimationPlayer::new(animation).with_serial(serial));
    Ok(())
}

pub(super) fn stop_animation(world: &mut WorldCore, id: BodyId) -> bool {
    world.animations.remove(&id).is_some()
}

pub(super) fn load_scene_json(world: &mut WorldCore, json: &str) -> Result<Vec<BodyId>, SceneError> {
    let scene = SceneBundle::from_json(json)?;
    let bodies = scene.build_bodies()?;

    clear(world);
    world.settings = scene.settings;
    let ids: Vec<BodyId> = bodies.into_iter().map(|b| world.bodies.add_body(b)).collect();
    log::debug!("scene loaded: {} bodies", ids.len());
    Ok(ids)
}

pub(super) fn scene_json(world: &WorldCore) -> Result<String, SceneError> {
    SceneBundle {
        settings: world.settings,
        bodies: world.bodies.bodies().iter().map(BodyDesc::from_body).collect(),
    }
    .to_json()
}
