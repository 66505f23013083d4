//! Round state and movement rules
//!
//! All entities for one round live here. Everything is created at round start
//! and discarded when the round ends; a new round builds fresh entities with
//! the scaled-up enemy speed and roster.

use serde::{Deserialize, Serialize};

use super::sprite::{ImageHandle, Sprite};
use crate::consts::*;

/// Vertical input direction under the held-key model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveDir {
    Up,
    Down,
    #[default]
    Idle,
}

/// Status of a round; terminal once it leaves `Ongoing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Ongoing,
    Won,
    Lost,
}

/// The player-controlled sprite, moving vertically under direct input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub sprite: Sprite,
    /// Tiles moved per tick
    pub speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            sprite: Sprite::new(ImageHandle::Player, x, y, SPRITE_SIZE, SPRITE_SIZE),
            speed: PLAYER_SPEED,
        }
    }

    /// Apply one tick of vertical movement
    ///
    /// Up moves toward y = 0. Only a lower clamp exists; the player can walk
    /// off the top edge.
    pub fn step(&mut self, dir: MoveDir, floor_bound: f32) {
        match dir {
            MoveDir::Up => self.sprite.pos.y -= self.speed,
            MoveDir::Down => self.sprite.pos.y += self.speed,
            MoveDir::Idle => {}
        }
        let floor = floor_bound - FLOOR_MARGIN;
        if self.sprite.pos.y >= floor {
            self.sprite.pos.y = floor;
        }
    }
}

/// A patrolling enemy bouncing between the horizontal bounds
///
/// The sign of `speed` encodes the current travel direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patrol {
    pub sprite: Sprite,
    pub speed: f32,
}

impl Patrol {
    /// Spawn with the base speed scaled multiplicatively by the level
    pub fn new(x: f32, y: f32, level: f32) -> Self {
        Self {
            sprite: Sprite::new(ImageHandle::Enemy, x, y, SPRITE_SIZE, SPRITE_SIZE),
            speed: PATROL_BASE_SPEED * level,
        }
    }

    /// Advance one tick, flipping direction at the play-area bounds
    ///
    /// The left check short-circuits the right one, so a play area narrow
    /// enough to trigger both resolves in favor of heading right.
    pub fn step(&mut self, right_bound: f32) {
        if self.sprite.pos.x <= PATROL_LEFT_BOUND {
            self.speed = self.speed.abs();
        } else if self.sprite.pos.x >= right_bound - PATROL_RIGHT_MARGIN {
            self.speed = -self.speed.abs();
        }
        self.sprite.pos.x += self.speed;
    }
}

/// Complete state of one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub player: Player,
    /// Static treasure sprite, immutable after creation
    pub goal: Sprite,
    /// Full roster; only the first `active_enemy_count()` move and draw
    pub enemies: Vec<Patrol>,
    pub level: f32,
    pub outcome: RoundOutcome,
    /// Ticks elapsed this round
    pub time_ticks: u64,
}

impl RoundState {
    pub fn new(level: f32) -> Self {
        let (px, py) = PLAYER_START;
        let (tx, ty) = TREASURE_POS;
        let enemies = ENEMY_SPAWNS
            .iter()
            .map(|&(x, y)| Patrol::new(x, y, level))
            .collect();
        Self {
            player: Player::new(px, py),
            goal: Sprite::new(ImageHandle::Treasure, tx, ty, SPRITE_SIZE, SPRITE_SIZE),
            enemies,
            level,
            outcome: RoundOutcome::Ongoing,
            time_ticks: 0,
        }
    }

    /// Enemies that move and draw this round; the rest of the roster idles
    ///
    /// Level 1 fields one enemy; past level 1 a second joins, past level 2 a
    /// third.
    pub fn active_enemy_count(&self) -> usize {
        let mut n = 1;
        if self.level > 1.0 {
            n += 1;
        }
        if self.level > 2.0 {
            n += 1;
        }
        n.min(self.enemies.len())
    }
}
