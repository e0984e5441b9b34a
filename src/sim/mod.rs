//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Entities stored in insertion order with stable ids
//! - Systems run in a fixed order once per frame
//! - Elapsed time is the only clock

pub mod collision;
pub mod spawn;
pub mod state;
pub mod store;
pub mod systems;
pub mod tick;

pub use collision::{BounceAxis, brick_bounce_axis, check_collision, overlap};
pub use spawn::{PlayerIds, build_grid, spawn_ball, spawn_level, spawn_platform};
pub use state::{GameEvent, GameState, SessionPhase};
pub use store::{Behavior, Entity, EntityId, EntityStore, Transform};
pub use tick::{TickInput, tick};
