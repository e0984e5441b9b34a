//! Headless presenter
//!
//! Replays a fixed script of frame inputs and records what it was asked to
//! draw. Backs the demo binary and the tests; once the script runs out it
//! reports a window close.

use std::collections::VecDeque;

use glam::Vec2;

use super::{Background, Frame, FrameInput, Presenter};
use crate::assets::AssetManifest;
use crate::error::AssetError;

#[derive(Debug, Clone)]
pub struct HeadlessPresenter {
    viewport: Vec2,
    script: VecDeque<FrameInput>,
    /// Check the manifest against the filesystem instead of assuming success
    verify_files: bool,
    /// Simulated decode failure for one file name
    fail_on: Option<&'static str>,
    frames_rendered: u64,
    last_background: Option<Background>,
    background_switches: u32,
    last_draw_count: usize,
}

impl HeadlessPresenter {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            script: VecDeque::new(),
            verify_files: false,
            fail_on: None,
            frames_rendered: 0,
            last_background: None,
            background_switches: 0,
            last_draw_count: 0,
        }
    }

    pub fn with_script(mut self, frames: impl IntoIterator<Item = FrameInput>) -> Self {
        self.script = frames.into_iter().collect();
        self
    }

    pub fn verifying_files(mut self) -> Self {
        self.verify_files = true;
        self
    }

    pub fn failing_on(mut self, file_name: &'static str) -> Self {
        self.fail_on = Some(file_name);
        self
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn last_background(&self) -> Option<Background> {
        self.last_background
    }

    /// Times the background changed between consecutive frames
    pub fn background_switches(&self) -> u32 {
        self.background_switches
    }

    pub fn last_draw_count(&self) -> usize {
        self.last_draw_count
    }
}

impl Presenter for HeadlessPresenter {
    fn load_assets(&mut self, manifest: &AssetManifest) -> Result<(), AssetError> {
        if let Some(name) = self.fail_on {
            if manifest.textures.iter().any(|t| t.file_name() == name) {
                return Err(AssetError::Unreadable {
                    name,
                    reason: "simulated decode failure".into(),
                });
            }
        }
        if self.verify_files {
            manifest.verify()?;
        }
        Ok(())
    }

    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn poll_input(&mut self) -> FrameInput {
        match self.script.pop_front() {
            Some(input) => {
                self.viewport = input.viewport;
                input
            }
            None => FrameInput {
                close_requested: true,
                ..FrameInput::idle(0.0, self.viewport)
            },
        }
    }

    fn render(&mut self, frame: &Frame<'_>) {
        if let Some(prev) = self.last_background {
            if prev != frame.background {
                self.background_switches += 1;
            }
        }
        self.last_background = Some(frame.background);
        self.last_draw_count = frame.draws.len();
        self.frames_rendered += 1;
    }
}
