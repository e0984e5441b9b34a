//! Per-frame update systems
//!
//! Each system touches only the entities whose behavior it applies to and
//! looks them up by id, so removals elsewhere never redirect it.

use glam::Vec2;

use super::collision::{
    BounceAxis, WallHits, bounce_off_platform, bounce_off_walls, brick_bounce_axis,
    check_collision, clamp_to_viewport_x, fell_out,
};
use super::store::{Behavior, EntityId, EntityStore};

/// Move the platform from held keys. Returns true if a movement key was held.
///
/// `vel.x` acts as the keyboard speed; Left and Right cancel when both held.
pub fn platform_input(
    store: &mut EntityStore,
    platform: EntityId,
    left: bool,
    right: bool,
    dt: f32,
) -> bool {
    let Some(entity) = store.get_mut(platform) else {
        return false;
    };
    let speed = entity.vel.x;
    if left {
        entity.transform.position.x -= speed * dt;
    }
    if right {
        entity.transform.position.x += speed * dt;
    }
    left || right
}

/// Clamp the platform into the viewport; snap it home if it ever drops below
pub fn platform_bounds(store: &mut EntityStore, platform: EntityId, viewport: Vec2, home: Vec2) {
    let Some(entity) = store.get_mut(platform) else {
        return;
    };
    clamp_to_viewport_x(&mut entity.transform, viewport.x);
    if entity.transform.position.y > viewport.y {
        log::warn!(
            "Platform left the viewport at y={}, snapping home",
            entity.transform.position.y
        );
        entity.transform.position = home;
    }
}

/// Integrate ball position
pub fn move_ball(store: &mut EntityStore, ball: EntityId, dt: f32) {
    if let Some(entity) = store.get_mut(ball) {
        entity.transform.position += entity.vel * dt;
    }
}

/// Bounce the ball off the side walls and the ceiling
pub fn ball_walls(store: &mut EntityStore, ball: EntityId, viewport: Vec2) -> WallHits {
    match store.get_mut(ball) {
        Some(entity) => bounce_off_walls(&entity.transform, &mut entity.vel, viewport),
        None => WallHits::default(),
    }
}

/// Bounce the ball off the platform
pub fn ball_platform(store: &mut EntityStore, ball: EntityId, platform: EntityId) -> bool {
    let Some(platform_box) = store.get(platform).map(|e| e.transform) else {
        return false;
    };
    match store.get_mut(ball) {
        Some(entity) => bounce_off_platform(&mut entity.transform, &mut entity.vel, &platform_box),
        None => false,
    }
}

/// Resolve ball hits against every brick and remove the bricks that were hit
///
/// All bricks overlapping the ball this frame are collected before anything
/// is removed, so no brick is skipped. Each axis flips at most once per
/// frame, so two bricks hit side by side do not cancel each other out.
pub fn ball_bricks(store: &mut EntityStore, ball: EntityId) -> Vec<EntityId> {
    let Some(ball_box) = store.get(ball).map(|e| e.transform) else {
        return Vec::new();
    };

    let mut hit = Vec::new();
    let mut flip_x = false;
    let mut flip_y = false;
    for brick in store.iter().filter(|e| e.behavior == Behavior::Brick) {
        if check_collision(&ball_box, &brick.transform) {
            match brick_bounce_axis(&ball_box, &brick.transform) {
                BounceAxis::X => flip_x = true,
                BounceAxis::Y => flip_y = true,
            }
            hit.push(brick.id);
        }
    }
    if hit.is_empty() {
        return hit;
    }

    if let Some(entity) = store.get_mut(ball) {
        if flip_x {
            entity.vel = BounceAxis::X.reflect(entity.vel);
        }
        if flip_y {
            entity.vel = BounceAxis::Y.reflect(entity.vel);
        }
    }
    store.retain(|e| !hit.contains(&e.id));
    hit
}

/// True if the ball has dropped below the viewport
pub fn ball_missed(store: &EntityStore, ball: EntityId, viewport: Vec2) -> bool {
    store
        .get(ball)
        .is_some_and(|e| fell_out(&e.transform, viewport))
}

/// Remove every brick. Returns how many were removed.
pub fn clear_bricks(store: &mut EntityStore) -> usize {
    store.retain(|e| e.behavior != Behavior::Brick)
}

/// Push drawable positions from transforms before rendering
pub fn sync_drawables(store: &mut EntityStore) {
    for entity in store.iter_mut() {
        entity.drawable.set_position(entity.transform.position);
    }
}
