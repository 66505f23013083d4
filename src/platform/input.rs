//! Keyboard event translation
//!
//! Held-key model: a key-down latches a direction and it persists across
//! ticks until a key-up of either vertical key releases it. The windowing
//! toolkit feeds `InputEvent`s; the sim only ever sees the resulting
//! `MoveDir`.

use std::collections::VecDeque;

use crate::sim::MoveDir;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

/// A single windowing event, drained once per tick by the round loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Held-key direction state, persisted across ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    dir: MoveDir,
}

impl InputState {
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Up) => self.dir = MoveDir::Up,
            InputEvent::KeyDown(Key::Down) => self.dir = MoveDir::Down,
            // Releasing either vertical key stops movement
            InputEvent::KeyUp(_) => self.dir = MoveDir::Idle,
            InputEvent::Quit => {}
        }
    }

    pub fn dir(&self) -> MoveDir {
        self.dir
    }
}

/// Source of windowing events, polled once per tick
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// No events, ever (headless demo)
#[derive(Debug, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// Replays a pre-recorded event stream, one batch per tick
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_key_persists() {
        let mut state = InputState::default();
        assert_eq!(state.dir(), MoveDir::Idle);

        state.apply(InputEvent::KeyDown(Key::Up));
        assert_eq!(state.dir(), MoveDir::Up);
        // No events on later ticks: direction stays held
        assert_eq!(state.dir(), MoveDir::Up);

        state.apply(InputEvent::KeyUp(Key::Up));
        assert_eq!(state.dir(), MoveDir::Idle);
    }

    #[test]
    fn test_either_key_up_releases() {
        // Key-up of the other vertical key also stops movement
        let mut state = InputState::default();
        state.apply(InputEvent::KeyDown(Key::Down));
        assert_eq!(state.dir(), MoveDir::Down);
        state.apply(InputEvent::KeyUp(Key::Up));
        assert_eq!(state.dir(), MoveDir::Idle);
    }

    #[test]
    fn test_quit_does_not_touch_direction() {
        let mut state = InputState::default();
        state.apply(InputEvent::KeyDown(Key::Up));
        state.apply(InputEvent::Quit);
        assert_eq!(state.dir(), MoveDir::Up);
    }

    #[test]
    fn test_scripted_input_replays_then_dries_up() {
        let mut script = ScriptedInput::new([
            vec![InputEvent::KeyDown(Key::Up)],
            vec![],
            vec![InputEvent::Quit],
        ]);
        assert_eq!(script.poll(), vec![InputEvent::KeyDown(Key::Up)]);
        assert_eq!(script.poll(), vec![]);
        assert_eq!(script.poll(), vec![InputEvent::Quit]);
        assert_eq!(script.poll(), vec![]);
    }
}
