//! Game session state
//!
//! Everything the frame loop mutates lives here. Serializable so two runs can
//! be compared snapshot to snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawn::{PlayerIds, spawn_level};
use super::store::{Behavior, EntityId, EntityStore};
use crate::present::Background;
use crate::settings::Settings;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Ball parked, waiting for the first platform move
    #[default]
    Unarmed,
    /// Ball in motion, all collision rules apply
    Armed,
    /// No bricks left (or forced); terminal
    Won,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Armed,
    BrickDestroyed { id: EntityId },
    BallLost,
    Won,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub phase: SessionPhase,
    pub background: Background,
    pub store: EntityStore,
    /// None once removed by the win
    pub ball: Option<EntityId>,
    pub platform: Option<EntityId>,
    /// Frames ticked so far
    pub frame: u64,
    /// Events from the ticks since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Spawn the level for a viewport of the given size
    pub fn new(settings: Settings, viewport: Vec2) -> Self {
        let mut store = EntityStore::new();
        let PlayerIds { ball, platform } = spawn_level(&mut store, &settings, viewport);
        Self {
            settings,
            phase: SessionPhase::Unarmed,
            background: Background::Playfield,
            store,
            ball: Some(ball),
            platform: Some(platform),
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn brick_count(&self) -> usize {
        self.store.count_of(Behavior::Brick)
    }

    pub fn is_won(&self) -> bool {
        self.phase == SessionPhase::Won
    }

    /// Put ball and platform back at their spawn transforms and velocities
    pub fn reset_player(&mut self) {
        let ball_spawn = self.settings.ball;
        let platform_spawn = self.settings.platform;

        if let Some(ball) = self.ball.and_then(|id| self.store.get_mut(id)) {
            ball.transform.position = ball_spawn.position;
            ball.transform.size = ball_spawn.size;
            ball.vel = ball_spawn.velocity;
        }
        if let Some(platform) = self.platform.and_then(|id| self.store.get_mut(id)) {
            platform.transform.position = platform_spawn.position;
            platform.transform.size = platform_spawn.size;
            platform.vel = platform_spawn.velocity;
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
