//! Per-frame simulation step
//!
//! Systems run in a fixed order: platform input, ball movement and
//! collisions, then the win check.

use glam::Vec2;

use super::state::{GameEvent, GameState, SessionPhase};
use super::systems;
use crate::present::Background;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump straight to the win state
    pub force_win: bool,
    /// Viewport size this frame
    pub viewport: Vec2,
}

impl TickInput {
    pub fn idle(viewport: Vec2) -> Self {
        Self {
            left: false,
            right: false,
            force_win: false,
            viewport,
        }
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == SessionPhase::Won {
        return;
    }
    state.frame += 1;

    update_platform(state, input, dt);
    if state.phase == SessionPhase::Armed {
        update_ball(state, input.viewport, dt);
    }

    if state.brick_count() == 0 || input.force_win {
        enter_won(state);
    }
}

fn update_platform(state: &mut GameState, input: &TickInput, dt: f32) {
    let Some(platform) = state.platform else {
        return;
    };

    let moved = systems::platform_input(&mut state.store, platform, input.left, input.right, dt);
    systems::platform_bounds(
        &mut state.store,
        platform,
        input.viewport,
        state.settings.platform.position,
    );

    if moved && state.phase == SessionPhase::Unarmed {
        state.phase = SessionPhase::Armed;
        state.events.push(GameEvent::Armed);
        log::info!("Ball launched on frame {}", state.frame);
    }
}

fn update_ball(state: &mut GameState, viewport: Vec2, dt: f32) {
    let Some(ball) = state.ball else {
        return;
    };

    systems::move_ball(&mut state.store, ball, dt);
    let walls = systems::ball_walls(&mut state.store, ball, viewport);
    if walls.any() {
        log::trace!(
            "Ball hit a wall (side: {}, ceiling: {})",
            walls.side,
            walls.ceiling
        );
    }
    if let Some(platform) = state.platform {
        if systems::ball_platform(&mut state.store, ball, platform) {
            log::trace!("Ball bounced off the platform on frame {}", state.frame);
        }
    }

    for id in systems::ball_bricks(&mut state.store, ball) {
        log::debug!("Brick {:?} destroyed", id);
        state.events.push(GameEvent::BrickDestroyed { id });
    }

    if systems::ball_missed(&state.store, ball, viewport) {
        state.reset_player();
        state.phase = SessionPhase::Unarmed;
        state.events.push(GameEvent::BallLost);
        log::info!("Ball lost, {} bricks remain", state.brick_count());
    }
}

/// Clear the field and show the victory background. Terminal.
fn enter_won(state: &mut GameState) {
    let cleared = systems::clear_bricks(&mut state.store);
    if let Some(ball) = state.ball.take() {
        state.store.remove(ball);
    }
    if let Some(platform) = state.platform.take() {
        state.store.remove(platform);
    }
    state.background = Background::Victory;
    state.phase = SessionPhase::Won;
    state.events.push(GameEvent::Won);
    log::info!("Won on frame {} ({} bricks cleared by the win)", state.frame, cleared);
}
