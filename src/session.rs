//! Session driver
//!
//! Owns the difficulty counter and runs rounds back to back: a win bumps the
//! level and builds a fresh round, a loss or quit ends the session. An
//! explicit loop, so an arbitrarily long win streak costs no stack. There is
//! no level cap.

use crate::consts::*;
use crate::platform::input::{InputEvent, InputSource, InputState};
use crate::render::{FrameContext, compose};
use crate::settings::Settings;
use crate::sim::state::{RoundOutcome, RoundState};
use crate::sim::tick::{TickInput, tick};

/// What a finished session looked like
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub final_level: f32,
    pub final_outcome: RoundOutcome,
    pub quit: bool,
}

/// Difficulty of the next round, or `None` when the session ends
pub fn next_level(level: f32, outcome: RoundOutcome) -> Option<f32> {
    match outcome {
        RoundOutcome::Won => Some(level + LEVEL_STEP),
        RoundOutcome::Lost | RoundOutcome::Ongoing => None,
    }
}

pub struct SessionDriver<'a> {
    settings: &'a Settings,
    level: f32,
}

impl<'a> SessionDriver<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            level: settings.start_level,
        }
    }

    /// Run rounds until a loss, a quit, or the configured round cap
    pub fn run(
        &mut self,
        ctx: &mut FrameContext,
        events: &mut dyn InputSource,
    ) -> SessionSummary {
        log::info!("session start: level {}", self.level);
        let mut rounds_played = 0u32;

        let (final_outcome, quit) = loop {
            let (outcome, quit) = self.run_round(ctx, events);
            rounds_played += 1;
            match next_level(self.level, outcome) {
                Some(next) if !quit => {
                    self.level = next;
                    let capped = self
                        .settings
                        .max_rounds
                        .is_some_and(|cap| rounds_played >= cap);
                    if capped {
                        break (outcome, quit);
                    }
                }
                _ => break (outcome, quit),
            }
        };

        let summary = SessionSummary {
            rounds_played,
            final_level: self.level,
            final_outcome,
            quit,
        };
        log::info!(
            "session over: {} round(s), level {}, {:?}",
            summary.rounds_played,
            summary.final_level,
            summary.final_outcome
        );
        summary
    }

    /// One playthrough: fresh entities, tick until terminal
    fn run_round(
        &self,
        ctx: &mut FrameContext,
        events: &mut dyn InputSource,
    ) -> (RoundOutcome, bool) {
        let mut state = RoundState::new(self.level);
        let mut keys = InputState::default();
        let mut quit = false;

        log::info!("round start: level {}", self.level);

        loop {
            for event in events.poll() {
                if self.settings.log_events {
                    log::debug!("input event: {event:?}");
                }
                if event == InputEvent::Quit {
                    quit = true;
                }
                keys.apply(event);
            }

            let input = TickInput {
                dir: keys.dir(),
                quit,
                autopilot: self.settings.autopilot,
            };
            tick(&mut state, &input);

            if quit {
                log::info!("quit requested after {} tick(s)", state.time_ticks);
                return (state.outcome, true);
            }

            ctx.presenter.present(&compose(&state));

            match state.outcome {
                RoundOutcome::Ongoing => ctx.clock.wait(),
                outcome => {
                    // The terminal frame carries the banner; keep it up a second
                    ctx.clock.hold(OUTCOME_HOLD_TICKS);
                    log::info!("round over: {outcome:?} after {} tick(s)", state.time_ticks);
                    return (outcome, false);
                }
            }
        }
    }
}
