//! Frame loop glue
//!
//! Startup order matters: assets are loaded before any entity exists, so a
//! failed load leaves nothing behind. Each frame then runs
//! poll → tick → drawable sync → render.

use crate::assets::AssetManifest;
use crate::error::GameError;
use crate::present::{DrawCommand, Frame, FrameInput, Presenter};
use crate::sanitize_dt;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SessionPhase, TickInput, systems, tick};

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
}

impl Game {
    /// Validate settings, load assets, then spawn the level
    pub fn start<P: Presenter>(presenter: &mut P, settings: Settings) -> Result<Self, GameError> {
        Self::start_with_manifest(presenter, settings, AssetManifest::default())
    }

    pub fn start_with_manifest<P: Presenter>(
        presenter: &mut P,
        settings: Settings,
        manifest: AssetManifest,
    ) -> Result<Self, GameError> {
        settings.validate()?;
        presenter.load_assets(&manifest)?;

        let viewport = presenter.viewport();
        log::info!("Starting session at {}x{}", viewport.x, viewport.y);
        Ok(Self {
            state: GameState::new(settings, viewport),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    /// Apply one frame of input. Returns `Exit` on Escape or window close.
    pub fn step(&mut self, input: &FrameInput) -> FrameOutcome {
        if input.wants_exit() {
            return FrameOutcome::Exit;
        }

        let dt = sanitize_dt(input.elapsed);
        if dt != input.elapsed {
            log::warn!("Elapsed time {} clamped to {}", input.elapsed, dt);
        }

        let tick_input = TickInput {
            left: input.keys.left,
            right: input.keys.right,
            force_win: input.keys.enter,
            viewport: input.viewport,
        };
        tick(&mut self.state, &tick_input, dt);
        systems::sync_drawables(&mut self.state.store);

        for event in self.state.drain_events() {
            if let GameEvent::BrickDestroyed { id } = event {
                log::trace!("Brick {:?} gone, {} left", id, self.state.brick_count());
            }
        }

        FrameOutcome::Continue
    }

    /// Draw list for the current state: background first, then store order
    pub fn frame(&self) -> Frame<'_> {
        let draws = self
            .state
            .store
            .iter()
            .map(|e| DrawCommand {
                entity: e.id,
                drawable: &e.drawable,
                position: e.transform.position,
            })
            .collect();
        Frame {
            background: self.state.background,
            draws,
        }
    }

    /// Run until the presenter asks to exit. Returns the number of frames rendered.
    pub fn run<P: Presenter>(&mut self, presenter: &mut P) -> u64 {
        let mut rendered = 0;
        loop {
            let input = presenter.poll_input();
            if self.step(&input) == FrameOutcome::Exit {
                break;
            }
            presenter.render(&self.frame());
            rendered += 1;
        }
        log::info!(
            "Session ended after {} frames in phase {:?}",
            rendered,
            self.state.phase
        );
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AssetError, ConfigError};
    use crate::present::{Background, HeadlessPresenter, KeyState};
    use crate::sim::Behavior;
    use glam::Vec2;

    const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

    fn frame_with(keys: KeyState) -> FrameInput {
        FrameInput {
            keys,
            ..FrameInput::idle(1.0 / 60.0, VIEWPORT)
        }
    }

    #[test]
    fn test_failed_assets_abort_before_spawning() {
        let mut presenter = HeadlessPresenter::new(VIEWPORT).failing_on("ball.png");
        let err = Game::start(&mut presenter, Settings::default()).err();
        assert!(matches!(
            err,
            Some(GameError::Asset(AssetError::Unreadable { name: "ball.png", .. }))
        ));
        assert_eq!(presenter.frames_rendered(), 0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut presenter = HeadlessPresenter::new(VIEWPORT);
        let mut settings = Settings::default();
        settings.platform.size = Vec2::new(f32::INFINITY, 30.0);
        assert!(matches!(
            Game::start(&mut presenter, settings),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn test_oversized_grid_rejected_before_spawning() {
        let mut presenter = HeadlessPresenter::new(VIEWPORT);
        let mut settings = Settings::default();
        settings.grid.rows = u32::MAX;
        settings.grid.cols = u32::MAX;
        assert!(matches!(
            Game::start(&mut presenter, settings),
            Err(GameError::Config(ConfigError::Invalid { field: "grid", .. }))
        ));
    }

    #[test]
    fn test_frame_lists_background_then_entities() {
        let mut presenter = HeadlessPresenter::new(VIEWPORT);
        let game = Game::start(&mut presenter, Settings::default()).unwrap();
        let frame = game.frame();
        assert_eq!(frame.background, Background::Playfield);
        assert_eq!(frame.draws.len(), 162);
        assert_eq!(frame.draws[0].entity, game.state().ball.unwrap());
        assert_eq!(frame.draws[1].entity, game.state().platform.unwrap());
    }

    #[test]
    fn test_escape_and_close_exit() {
        let mut presenter = HeadlessPresenter::new(VIEWPORT);
        let mut game = Game::start(&mut presenter, Settings::default()).unwrap();

        let escape = frame_with(KeyState {
            escape: true,
            ..KeyState::default()
        });
        assert_eq!(game.step(&escape), FrameOutcome::Exit);

        let close = FrameInput {
            close_requested: true,
            ..FrameInput::idle(0.016, VIEWPORT)
        };
        assert_eq!(game.step(&close), FrameOutcome::Exit);
        assert_eq!(game.state().frame, 0);
    }

    #[test]
    fn test_drawables_follow_entities_after_step() {
        let mut presenter = HeadlessPresenter::new(VIEWPORT);
        let mut game = Game::start(&mut presenter, Settings::default()).unwrap();
        let right = frame_with(KeyState {
            right: true,
            ..KeyState::default()
        });
        game.step(&right);

        let frame = game.frame();
        for draw in &frame.draws {
            assert_eq!(draw.drawable.position(), draw.position);
        }
        assert_eq!(game.phase(), SessionPhase::Armed);
    }

    #[test]
    fn test_garbage_elapsed_does_not_move_ball() {
        let mut presenter = HeadlessPresenter::new(VIEWPORT);
        let mut game = Game::start(&mut presenter, Settings::default()).unwrap();
        let ball = game.state().ball.unwrap();
        let start = game.state().store.get(ball).unwrap().transform.position;

        let nan_right = FrameInput {
            keys: KeyState {
                right: true,
                ..KeyState::default()
            },
            ..FrameInput::idle(f32::NAN, VIEWPORT)
        };
        game.step(&nan_right);
        assert_eq!(game.phase(), SessionPhase::Armed);
        assert_eq!(game.state().store.get(ball).unwrap().transform.position, start);
    }

    #[test]
    fn test_run_until_enter_then_close() {
        let idle = FrameInput::idle(1.0 / 60.0, VIEWPORT);
        let enter = frame_with(KeyState {
            enter: true,
            ..KeyState::default()
        });
        let script = vec![idle, idle, enter, idle, idle];
        let mut presenter = HeadlessPresenter::new(VIEWPORT).with_script(script);
        let mut game = Game::start(&mut presenter, Settings::default()).unwrap();

        let rendered = game.run(&mut presenter);
        assert_eq!(rendered, 5);
        assert_eq!(presenter.frames_rendered(), 5);
        assert_eq!(game.phase(), SessionPhase::Won);
        assert_eq!(game.state().store.count_of(Behavior::Brick), 0);
        assert_eq!(presenter.last_background(), Some(Background::Victory));
        // Switched once and stayed there
        assert_eq!(presenter.background_switches(), 1);
        assert_eq!(presenter.last_draw_count(), 0);
    }
}
