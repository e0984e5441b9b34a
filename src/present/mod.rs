//! Presentation contract
//!
//! The window, texture decoding and drawing live outside this crate. A
//! presenter reports one [`FrameInput`] per frame and renders the [`Frame`]
//! the core hands back: background first, then every entity in store order.

pub mod drawable;
pub mod headless;

pub use drawable::{Background, Drawable, ShapeKind, TextureKind};
pub use headless::HeadlessPresenter;

use glam::Vec2;

use crate::assets::AssetManifest;
use crate::error::AssetError;
use crate::sim::EntityId;

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    /// Forces the win state
    pub enter: bool,
    pub escape: bool,
}

/// Everything the core learns from the platform in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub keys: KeyState,
    /// Window close button / OS quit request
    pub close_requested: bool,
    /// Seconds since the previous frame, as measured by the platform
    pub elapsed: f32,
    pub viewport: Vec2,
}

impl FrameInput {
    /// Idle frame with nothing pressed
    pub fn idle(elapsed: f32, viewport: Vec2) -> Self {
        Self {
            keys: KeyState::default(),
            close_requested: false,
            elapsed,
            viewport,
        }
    }

    /// Escape or close both end the loop
    pub fn wants_exit(&self) -> bool {
        self.close_requested || self.keys.escape
    }
}

/// One positioned drawable
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand<'a> {
    pub entity: EntityId,
    pub drawable: &'a Drawable,
    pub position: Vec2,
}

/// What to draw this frame
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub background: Background,
    pub draws: Vec<DrawCommand<'a>>,
}

/// External window/renderer
pub trait Presenter {
    /// Load every texture in the manifest. Any failure aborts startup.
    fn load_assets(&mut self, manifest: &AssetManifest) -> Result<(), AssetError>;

    /// Current drawable area in pixels
    fn viewport(&self) -> Vec2;

    /// Poll window events and key state for the next frame
    fn poll_input(&mut self) -> FrameInput;

    /// Draw the frame and wait for the next display refresh
    fn render(&mut self, frame: &Frame<'_>);
}
