//! Entity store
//!
//! Each entity is one struct carrying all of its components, so removing it
//! can never leave components out of step. Entities keep insertion order and
//! carry a stable id; positional removal shifts later entities down by one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::present::Drawable;

/// Stable entity identifier, never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Axis-aligned box: top-left position and size (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub size: Vec2,
}

impl Transform {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Which systems apply to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    Ball,
    Platform,
    Brick,
}

/// An entity and all of its components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub transform: Transform,
    /// Signed components give the direction
    pub vel: Vec2,
    pub drawable: Drawable,
    pub behavior: Behavior,
}

/// Ordered entity list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityStore {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an entity at the end
    pub fn append(
        &mut self,
        transform: Transform,
        vel: Vec2,
        drawable: Drawable,
        behavior: Behavior,
    ) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            transform,
            vel,
            drawable,
            behavior,
        });
        id
    }

    /// Remove the entity at `index`, shifting later entities down by one
    pub fn remove_at(&mut self, index: usize) -> Result<Entity, StoreError> {
        if index >= self.entities.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.entities.len(),
            });
        }
        Ok(self.entities.remove(index))
    }

    /// Remove by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        Some(self.entities.remove(index))
    }

    /// Keep only entities matching the predicate, preserving order. Returns the number removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Entity) -> bool) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| keep(e));
        before - self.entities.len()
    }

    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn count_of(&self, behavior: Behavior) -> usize {
        self.entities.iter().filter(|e| e.behavior == behavior).count()
    }

    pub fn ids_of(&self, behavior: Behavior) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.behavior == behavior)
            .map(|e| e.id)
            .collect()
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }
}
