//! Layout and kinematics settings
//!
//! Defaults reproduce the one fixed level. Settings can be round-tripped
//! through JSON for embedding hosts and tests; nothing is persisted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How entities are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawStyle {
    /// Textured sprites from the asset manifest
    #[default]
    Sprites,
    /// Flat colored primitives
    Shapes,
}

/// Starting kinematics for a single entity (ball or platform)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSettings {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
}

impl SpawnSettings {
    pub const fn new(position: Vec2, size: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            size,
            velocity,
        }
    }
}

/// Brick lattice parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Top-left corner of cell (0, 0)
    pub origin: Vec2,
    pub rows: u32,
    pub cols: u32,
    /// Gap added to the cell step on both axes
    pub spacing: f32,
    /// Lattice step. Decoupled from brick size, so oversized bricks overlap.
    pub cell_step: Vec2,
    pub brick_width_per_viewport_height: f32,
    pub brick_height_per_viewport_width: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            origin: GRID_ORIGIN,
            rows: GRID_ROWS,
            cols: GRID_COLS,
            spacing: GRID_SPACING,
            cell_step: CELL_STEP,
            brick_width_per_viewport_height: BRICK_WIDTH_PER_VIEWPORT_HEIGHT,
            brick_height_per_viewport_width: BRICK_HEIGHT_PER_VIEWPORT_WIDTH,
        }
    }
}

impl GridSettings {
    /// Brick size derived from the viewport at startup
    pub fn brick_size(&self, viewport: Vec2) -> Vec2 {
        Vec2::new(
            viewport.y * self.brick_width_per_viewport_height,
            viewport.x * self.brick_height_per_viewport_width,
        )
    }

    pub fn brick_count(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub ball: SpawnSettings,
    pub platform: SpawnSettings,
    pub grid: GridSettings,
    #[serde(default)]
    pub style: DrawStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball: SpawnSettings::new(BALL_SPAWN_POS, BALL_SIZE, BALL_START_VEL),
            platform: SpawnSettings::new(PLATFORM_SPAWN_POS, PLATFORM_SIZE, PLATFORM_START_VEL),
            grid: GridSettings::default(),
            style: DrawStyle::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing sections are an error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the update systems cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_vec("ball.position", self.ball.position, false)?;
        check_vec("ball.size", self.ball.size, true)?;
        check_vec("ball.velocity", self.ball.velocity, false)?;
        check_vec("platform.position", self.platform.position, false)?;
        check_vec("platform.size", self.platform.size, true)?;
        check_vec("platform.velocity", self.platform.velocity, false)?;
        if self.platform.velocity.x < 0.0 {
            return Err(ConfigError::Invalid {
                field: "platform.velocity",
                reason: "x is used as a speed and must not be negative".into(),
            });
        }
        let bricks = (self.grid.rows as usize).checked_mul(self.grid.cols as usize);
        if bricks.is_none_or(|n| n > MAX_BRICKS) {
            return Err(ConfigError::Invalid {
                field: "grid",
                reason: format!(
                    "{}x{} bricks exceeds the limit of {MAX_BRICKS}",
                    self.grid.rows, self.grid.cols
                ),
            });
        }
        check_vec("grid.origin", self.grid.origin, false)?;
        check_vec("grid.cell_step", self.grid.cell_step, true)?;
        check_scalar("grid.spacing", self.grid.spacing)?;
        check_scalar(
            "grid.brick_width_per_viewport_height",
            self.grid.brick_width_per_viewport_height,
        )?;
        check_scalar(
            "grid.brick_height_per_viewport_width",
            self.grid.brick_height_per_viewport_width,
        )?;
        Ok(())
    }
}

fn check_vec(field: &'static str, v: Vec2, non_negative: bool) -> Result<(), ConfigError> {
    if !v.is_finite() {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{v} is not finite"),
        });
    }
    if non_negative && (v.x < 0.0 || v.y < 0.0) {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{v} has a negative component"),
        });
    }
    Ok(())
}

fn check_scalar(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be finite and non-negative"),
        });
    }
    Ok(())
}
