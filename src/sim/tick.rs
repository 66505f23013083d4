//! Fixed timestep round tick
//!
//! One call advances the round by one frame: apply input, move the player and
//! the active enemies, then resolve the terminal checks goal-first.

use super::collision::overlaps;
use super::state::{MoveDir, RoundOutcome, RoundState};
use crate::consts::*;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held vertical direction from the keyboard
    pub dir: MoveDir,
    /// Window-close signal; unconditional non-winning termination
    pub quit: bool,
    /// Demo mode - the sim steers the player itself
    pub autopilot: bool,
}

/// Advance the round by one tick
///
/// A terminal round is inert: further calls change nothing.
pub fn tick(state: &mut RoundState, input: &TickInput) {
    if state.outcome != RoundOutcome::Ongoing {
        return;
    }
    if input.quit {
        state.outcome = RoundOutcome::Lost;
        return;
    }

    let dir = if input.autopilot {
        autopilot_dir(state)
    } else {
        input.dir
    };

    state.time_ticks += 1;

    state.player.step(dir, SCREEN_HEIGHT);
    let active = state.active_enemy_count();
    for enemy in &mut state.enemies[..active] {
        enemy.step(SCREEN_WIDTH);
    }

    // Goal check first; enemy checks never run on a winning tick
    if overlaps(&state.player.sprite, &state.goal) {
        state.outcome = RoundOutcome::Won;
        return;
    }
    for enemy in &state.enemies[..active] {
        if overlaps(&state.player.sprite, &enemy.sprite) {
            state.outcome = RoundOutcome::Lost;
            return;
        }
    }
}

/// Demo steering: climb, but hold position while an active enemy in the row
/// ahead is too close to the player's column
fn autopilot_dir(state: &RoundState) -> MoveDir {
    let player = &state.player.sprite;
    let lookahead = state.player.speed * 4.0;
    let active = state.active_enemy_count();
    for enemy in &state.enemies[..active] {
        let e = &enemy.sprite;
        let ahead = e.bottom() >= player.top() - lookahead && e.top() <= player.bottom();
        if !ahead {
            continue;
        }
        let gap = (e.center().x - player.center().x).abs();
        // Margin the patrol can cover before the player clears the row
        let closing = enemy.speed.abs() * 12.0 + e.size.x;
        if gap < closing {
            return MoveDir::Idle;
        }
    }
    MoveDir::Up
}
