//! Entity spawning: ball, platform and the brick grid

use glam::Vec2;

use super::store::{Behavior, EntityId, EntityStore, Transform};
use crate::consts::MAX_BRICKS;
use crate::present::{Drawable, ShapeKind, TextureKind};
use crate::settings::{DrawStyle, GridSettings, Settings, SpawnSettings};

const BALL_COLOR: [u8; 4] = [255, 255, 255, 255];
const PLATFORM_COLOR: [u8; 4] = [0, 0, 255, 255];
const BRICK_COLOR: [u8; 4] = [119, 76, 194, 255];

/// Build the drawable for an entity of the given kind
pub fn drawable_for(behavior: Behavior, style: DrawStyle, transform: &Transform) -> Drawable {
    match style {
        DrawStyle::Sprites => {
            let texture = match behavior {
                Behavior::Ball => TextureKind::Ball,
                Behavior::Platform => TextureKind::Platform,
                Behavior::Brick => TextureKind::Brick,
            };
            Drawable::sprite(texture, transform.position, transform.size)
        }
        DrawStyle::Shapes => {
            let (shape, color) = match behavior {
                Behavior::Ball => (
                    ShapeKind::Circle {
                        radius: transform.size.x.min(transform.size.y) / 2.0,
                    },
                    BALL_COLOR,
                ),
                Behavior::Platform => (
                    ShapeKind::Rectangle {
                        size: transform.size,
                    },
                    PLATFORM_COLOR,
                ),
                Behavior::Brick => (
                    ShapeKind::Rectangle {
                        size: transform.size,
                    },
                    BRICK_COLOR,
                ),
            };
            Drawable::shape(shape, color, transform.position)
        }
    }
}

fn spawn_one(
    store: &mut EntityStore,
    behavior: Behavior,
    style: DrawStyle,
    position: Vec2,
    size: Vec2,
    vel: Vec2,
) -> EntityId {
    let transform = Transform::new(position, size);
    let drawable = drawable_for(behavior, style, &transform);
    store.append(transform, vel, drawable, behavior)
}

pub fn spawn_ball(
    store: &mut EntityStore,
    style: DrawStyle,
    position: Vec2,
    size: Vec2,
    vel: Vec2,
) -> EntityId {
    spawn_one(store, Behavior::Ball, style, position, size, vel)
}

pub fn spawn_platform(
    store: &mut EntityStore,
    style: DrawStyle,
    position: Vec2,
    size: Vec2,
    vel: Vec2,
) -> EntityId {
    spawn_one(store, Behavior::Platform, style, position, size, vel)
}

/// Top-left corner of lattice cell (row, col)
pub fn lattice_position(origin: Vec2, cell_step: Vec2, spacing: f32, row: u32, col: u32) -> Vec2 {
    origin
        + Vec2::new(
            col as f32 * (cell_step.x + spacing),
            row as f32 * (cell_step.y + spacing),
        )
}

/// Place `rows × cols` stationary bricks, row-major
///
/// The lattice step comes from `grid.cell_step`, not from `brick_size`.
pub fn build_grid(
    store: &mut EntityStore,
    style: DrawStyle,
    grid: &GridSettings,
    brick_size: Vec2,
) -> Vec<EntityId> {
    let mut ids = Vec::with_capacity(grid.brick_count().min(MAX_BRICKS));
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let pos = lattice_position(grid.origin, grid.cell_step, grid.spacing, row, col);
            ids.push(spawn_one(store, Behavior::Brick, style, pos, brick_size, Vec2::ZERO));
        }
    }
    ids
}

/// Ids of the player entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerIds {
    pub ball: EntityId,
    pub platform: EntityId,
}

/// Spawn the whole level: ball, platform, then the grid
pub fn spawn_level(store: &mut EntityStore, settings: &Settings, viewport: Vec2) -> PlayerIds {
    let SpawnSettings {
        position,
        size,
        velocity,
    } = settings.ball;
    let ball = spawn_ball(store, settings.style, position, size, velocity);

    let SpawnSettings {
        position,
        size,
        velocity,
    } = settings.platform;
    let platform = spawn_platform(store, settings.style, position, size, velocity);

    let brick_size = settings.grid.brick_size(viewport);
    let bricks = build_grid(store, settings.style, &settings.grid, brick_size);
    log::info!(
        "Spawned level: {} bricks ({}x{}) of {}x{} px",
        bricks.len(),
        settings.grid.rows,
        settings.grid.cols,
        brick_size.x,
        brick_size.y
    );

    PlayerIds { ball, platform }
}
