//! Axis-aligned sprite primitive
//!
//! Every drawable object is a `Sprite`: an opaque image handle plus an
//! axis-aligned rectangle. Pixel loading and scaling happen outside the sim;
//! the handle only names which asset the rectangle is drawn with.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Names one of the fixed game assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageHandle {
    Background,
    Player,
    Enemy,
    Treasure,
}

impl ImageHandle {
    /// Asset file the handle resolves to
    pub fn path(&self) -> &'static str {
        match self {
            ImageHandle::Background => "background.png",
            ImageHandle::Player => "player.png",
            ImageHandle::Enemy => "enemy.png",
            ImageHandle::Treasure => "treasure.png",
        }
    }
}

/// An axis-aligned rectangle with a visual representation
///
/// `pos` is the top-left corner in screen coordinates (y grows downward).
/// Invariant: both size components are positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub image: ImageHandle,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Sprite {
    pub fn new(image: ImageHandle, x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0);
        Self {
            image,
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}
