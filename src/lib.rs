//! Casse-Brique - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Entity store, spawner and the per-frame update systems
//! - `present`: Contract with the external window/renderer
//! - `game`: Startup and frame loop glue
//! - `settings`: Layout and kinematics configuration
//! - `assets`: Fixed asset manifest checked at startup

pub mod assets;
pub mod error;
pub mod game;
pub mod present;
pub mod settings;
pub mod sim;

pub use assets::AssetManifest;
pub use error::{AssetError, ConfigError, GameError, StoreError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Largest elapsed time a single frame may integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Viewport used when no window reports one (full HD desktop)
    pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

    /// Ball defaults
    pub const BALL_SPAWN_POS: Vec2 = Vec2::new(957.0, 900.0);
    pub const BALL_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    pub const BALL_START_VEL: Vec2 = Vec2::new(400.0, -400.0);

    /// Platform defaults. Only `x` of the velocity is used, as a keyboard speed.
    pub const PLATFORM_SPAWN_POS: Vec2 = Vec2::new(900.0, 950.0);
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(150.0, 30.0);
    pub const PLATFORM_START_VEL: Vec2 = Vec2::new(600.0, 0.0);

    /// Brick grid defaults
    pub const GRID_ORIGIN: Vec2 = Vec2::new(100.0, 100.0);
    pub const GRID_ROWS: u32 = 10;
    pub const GRID_COLS: u32 = 16;
    pub const GRID_SPACING: f32 = 10.0;
    /// Lattice step, independent of the brick size
    pub const CELL_STEP: Vec2 = Vec2::new(100.0, 20.0);
    /// Upper bound on `rows × cols` accepted from settings
    pub const MAX_BRICKS: usize = 10_000;

    /// Brick width as a fraction of the viewport height
    pub const BRICK_WIDTH_PER_VIEWPORT_HEIGHT: f32 = 0.095;
    /// Brick height as a fraction of the viewport width
    pub const BRICK_HEIGHT_PER_VIEWPORT_WIDTH: f32 = 0.014;
}

/// Clamp an elapsed frame time reported by the platform into `[0, MAX_FRAME_DT]`.
///
/// NaN, infinities and negative values all collapse to zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        return 0.0;
    }
    dt.min(consts::MAX_FRAME_DT)
}
