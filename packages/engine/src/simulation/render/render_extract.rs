use super::WorldCore;

/// Copy every active body's world hit-box into the flat transfer buffers:
/// `x, y` pairs in `outline_buffer`, one vertex count per body in
/// `outline_counts`. Bodies keep their insertion order.
pub(super) fn extract_outlines(world: &mut WorldCore) -> usize {
    world.outline_buffer.clear();
    world.outline_counts.clear();

    for body in world.bodies.bodies().iter().filter(|b| b.active) {
        let points = body.moved_hit_box().points();
        world.outline_counts.push(points.len() as u32);
        world
            .outline_buffer
            .extend(points.iter().flat_map(|p| [p.x as f32, p.y as f32]));
    }

    world.outline_counts.len()
}
