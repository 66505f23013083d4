//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Enemy checks in stable roster order
//! - No rendering or platform dependencies

pub mod collision;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use sprite::{ImageHandle, Sprite};
pub use state::{MoveDir, Patrol, Player, RoundOutcome, RoundState};
pub use tick::{TickInput, tick};
