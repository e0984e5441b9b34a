//! Casse-Brique entry point
//!
//! No window backend ships with this crate; the native binary drives a
//! headless session with a scripted player and logs how it went.

use casse_brique::consts::DEFAULT_VIEWPORT;
use casse_brique::present::{FrameInput, HeadlessPresenter, KeyState};
use casse_brique::{Game, Settings};

const DEMO_DT: f32 = 1.0 / 60.0;

/// Slide right to launch, let the ball play for a while, then force the win
fn demo_script() -> Vec<FrameInput> {
    let idle = FrameInput::idle(DEMO_DT, DEFAULT_VIEWPORT);
    let held = |keys: KeyState| FrameInput { keys, ..idle };

    let mut script = Vec::new();
    script.extend(std::iter::repeat_n(
        held(KeyState {
            right: true,
            ..KeyState::default()
        }),
        20,
    ));
    script.extend(std::iter::repeat_n(idle, 60 * 20));
    script.push(held(KeyState {
        enter: true,
        ..KeyState::default()
    }));
    script.extend(std::iter::repeat_n(idle, 30));
    script
}

fn main() {
    env_logger::init();
    log::info!("Casse-Brique (headless) starting...");

    let mut presenter = HeadlessPresenter::new(DEFAULT_VIEWPORT).with_script(demo_script());
    let mut game = match Game::start(&mut presenter, Settings::default()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Startup failed: {e}");
            return;
        }
    };

    let frames = game.run(&mut presenter);
    log::info!(
        "Rendered {} frames, final phase {:?}, background {:?}",
        frames,
        game.phase(),
        presenter.last_background()
    );
}
