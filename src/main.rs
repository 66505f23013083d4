//! Crossy RPG entry point
//!
//! Without a windowing backend wired up, the binary runs the session
//! headless: the autopilot steers the player and every frame goes to the log
//! presenter. Run with `RUST_LOG=info` to watch the rounds.

use crossy_rpg::Settings;
use crossy_rpg::consts::{SCREEN_TITLE, TICK_RATE};
use crossy_rpg::platform::clock::FrameClock;
use crossy_rpg::platform::input::NoInput;
use crossy_rpg::render::{FrameContext, LogPresenter};
use crossy_rpg::session::SessionDriver;

fn main() {
    env_logger::init();
    log::info!("{SCREEN_TITLE} starting...");

    let mut settings = Settings::load();
    // Headless: nobody is holding the arrow keys
    settings.autopilot = true;
    if settings.max_rounds.is_none() {
        settings.max_rounds = Some(3);
    }

    let clock = if settings.paced {
        FrameClock::new(TICK_RATE)
    } else {
        FrameClock::unpaced(TICK_RATE)
    };
    let mut ctx = FrameContext::new(clock, Box::new(LogPresenter::default()));
    let mut input = NoInput;

    let summary = SessionDriver::new(&settings).run(&mut ctx, &mut input);
    log::info!(
        "played {} round(s), reached level {}, final outcome {:?}",
        summary.rounds_played,
        summary.final_level,
        summary.final_outcome
    );
}
