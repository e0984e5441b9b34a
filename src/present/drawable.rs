//! Drawables owned by entities
//!
//! The renderable kind is fixed when the entity is built; positioning is
//! uniform across kinds so the frame sync never has to inspect the variant.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Textures the presentation side loads at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureKind {
    Background,
    Victory,
    Brick,
    Ball,
    Platform,
}

impl TextureKind {
    pub const ALL: [TextureKind; 5] = [
        TextureKind::Background,
        TextureKind::Victory,
        TextureKind::Brick,
        TextureKind::Ball,
        TextureKind::Platform,
    ];

    /// File name the texture is loaded from
    pub fn file_name(&self) -> &'static str {
        match self {
            TextureKind::Background => "background.jpg",
            TextureKind::Victory => "Victoire.png",
            TextureKind::Brick => "Brick2.png",
            TextureKind::Ball => "ball.png",
            TextureKind::Platform => "paddle.png",
        }
    }
}

/// Untextured primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle { radius: f32 },
    Rectangle { size: Vec2 },
}

/// Full-screen image drawn before any entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Background {
    #[default]
    Playfield,
    Victory,
}

impl Background {
    pub fn texture(&self) -> TextureKind {
        match self {
            Background::Playfield => TextureKind::Background,
            Background::Victory => TextureKind::Victory,
        }
    }
}

/// A renderable instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    /// Texture stretched to `size`
    Sprite {
        texture: TextureKind,
        position: Vec2,
        size: Vec2,
    },
    /// Filled primitive, RGBA color
    Shape {
        shape: ShapeKind,
        color: [u8; 4],
        position: Vec2,
    },
}

impl Drawable {
    pub fn sprite(texture: TextureKind, position: Vec2, size: Vec2) -> Self {
        Drawable::Sprite {
            texture,
            position,
            size,
        }
    }

    pub fn shape(shape: ShapeKind, color: [u8; 4], position: Vec2) -> Self {
        Drawable::Shape {
            shape,
            color,
            position,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Drawable::Sprite { position, .. } | Drawable::Shape { position, .. } => *position,
        }
    }

    pub fn set_position(&mut self, pos: Vec2) {
        match self {
            Drawable::Sprite { position, .. } | Drawable::Shape { position, .. } => *position = pos,
        }
    }

    /// Texture backing this drawable, if any
    pub fn texture(&self) -> Option<TextureKind> {
        match self {
            Drawable::Sprite { texture, .. } => Some(*texture),
            Drawable::Shape { .. } => None,
        }
    }
}
