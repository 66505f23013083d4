//! Platform abstraction layer
//!
//! Everything the sim needs from the windowing toolkit, kept behind small
//! deterministic types:
//! - `clock`: fixed-interval tick pacing
//! - `input`: keyboard event translation under the held-key model

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputEvent, InputSource, InputState, Key, NoInput, ScriptedInput};
