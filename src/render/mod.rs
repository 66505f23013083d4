//! Scene composition and the presentation boundary
//!
//! The sim never draws. Each tick it is flattened into a `Scene`: an ordered
//! draw list plus an optional centered banner. `Presenter` implementations
//! own whatever actually puts pixels on screen; the round loop fires a frame
//! at them and never hears back.

use glam::Vec2;

use crate::consts::*;
use crate::platform::clock::FrameClock;
use crate::sim::sprite::{ImageHandle, Sprite};
use crate::sim::state::{RoundOutcome, RoundState};

/// One draw call: an image handle and where its rectangle goes
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteInstance {
    pub image: ImageHandle,
    pub pos: Vec2,
    pub size: Vec2,
}

impl From<&Sprite> for SpriteInstance {
    fn from(s: &Sprite) -> Self {
        Self {
            image: s.image,
            pos: s.pos,
            size: s.size,
        }
    }
}

/// Centered text overlay shown at round end
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: &'static str,
    pub pos: Vec2,
}

/// Everything one frame draws, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub sprites: Vec<SpriteInstance>,
    pub banner: Option<Banner>,
}

/// Flatten the round into its draw list
///
/// Order matters: background, treasure, player, then the active enemies.
/// Inactive roster entries are not drawn at all.
pub fn compose(state: &RoundState) -> Scene {
    let mut sprites = Vec::with_capacity(3 + state.enemies.len());
    sprites.push(SpriteInstance {
        image: ImageHandle::Background,
        pos: Vec2::ZERO,
        size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
    });
    sprites.push((&state.goal).into());
    sprites.push((&state.player.sprite).into());
    for enemy in &state.enemies[..state.active_enemy_count()] {
        sprites.push((&enemy.sprite).into());
    }

    let banner = match state.outcome {
        RoundOutcome::Won => Some(Banner {
            text: "You Won!",
            pos: BANNER_POS.into(),
        }),
        RoundOutcome::Lost => Some(Banner {
            text: "You Lose!",
            pos: BANNER_POS.into(),
        }),
        RoundOutcome::Ongoing => None,
    };

    Scene { sprites, banner }
}

/// Sink for composed frames; fire-and-forget, no backpressure
pub trait Presenter {
    fn present(&mut self, scene: &Scene);
}

/// Discards every frame (headless)
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _scene: &Scene) {}
}

/// Logs a one-line summary per frame, banners at info level
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, scene: &Scene) {
        self.frames += 1;
        log::trace!("frame {}: {} sprite(s)", self.frames, scene.sprites.len());
        if let Some(banner) = &scene.banner {
            log::info!("{}", banner.text);
        }
    }
}

/// Keeps every presented frame (tests)
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub frames: Vec<Scene>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, scene: &Scene) {
        self.frames.push(scene.clone());
    }
}

/// Session-scoped handles the round loop needs every frame
pub struct FrameContext {
    pub clock: FrameClock,
    pub presenter: Box<dyn Presenter>,
}

impl FrameContext {
    pub fn new(clock: FrameClock, presenter: Box<dyn Presenter>) -> Self {
        Self { clock, presenter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_order_level_one() {
        let scene = compose(&RoundState::new(1.0));
        // Background, treasure, player, one active enemy
        assert_eq!(scene.sprites.len(), 4);
        assert_eq!(scene.sprites[0].image, ImageHandle::Background);
        assert_eq!(scene.sprites[1].image, ImageHandle::Treasure);
        assert_eq!(scene.sprites[2].image, ImageHandle::Player);
        assert_eq!(scene.sprites[3].image, ImageHandle::Enemy);
        assert!(scene.banner.is_none());
    }

    #[test]
    fn test_higher_levels_draw_more_enemies() {
        assert_eq!(compose(&RoundState::new(1.5)).sprites.len(), 5);
        assert_eq!(compose(&RoundState::new(2.5)).sprites.len(), 6);
    }

    #[test]
    fn test_terminal_outcomes_carry_banners() {
        let mut state = RoundState::new(1.0);

        state.outcome = RoundOutcome::Won;
        let banner = compose(&state).banner.unwrap();
        assert_eq!(banner.text, "You Won!");
        assert_eq!(banner.pos, Vec2::new(300.0, 350.0));

        state.outcome = RoundOutcome::Lost;
        assert_eq!(compose(&state).banner.unwrap().text, "You Lose!");
    }
}
