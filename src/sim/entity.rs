//! Sprite-backed entities
//!
//! Every entity carries a bound sprite; its bounding box is the sprite's pixel
//! size multiplied by the entity's scale.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::Aabb;
use crate::consts::BASE_SCALE;

/// Opaque handle to an image owned by the external asset loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// Error raised when binding a sprite with an unusable size
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpriteError {
    #[error("sprite {handle:?} has invalid size {width}x{height}")]
    InvalidSize {
        handle: SpriteHandle,
        width: f32,
        height: f32,
    },
}

/// A sprite handle bound to its pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub handle: SpriteHandle,
    size: Vec2,
}

impl Sprite {
    pub fn new(handle: SpriteHandle, width: f32, height: f32) -> Result<Self, SpriteError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SpriteError::InvalidSize {
                handle,
                width,
                height,
            });
        }
        Ok(Self {
            handle,
            size: Vec2::new(width, height),
        })
    }

    /// Unscaled pixel size
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

/// Base game item: position, scale and sprite
#[derive(Debug, Clone)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    pub scale: Vec2,
    sprite: Sprite,
}

impl Entity {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            pos: Vec2::ZERO,
            scale: Vec2::splat(BASE_SCALE),
            sprite,
        }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Scaled bounding dimensions
    #[inline]
    pub fn dimensions(&self) -> Vec2 {
        self.sprite.size * self.scale
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.dimensions().x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.dimensions().y
    }

    /// Center of the bounding box
    #[inline]
    pub fn centered(&self) -> Vec2 {
        self.pos + self.dimensions() * 0.5
    }

    /// Move so the bounding box is centered on `center`
    pub fn center_on(&mut self, center: Vec2) {
        self.pos = center - self.dimensions() * 0.5;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.dimensions())
    }
}
