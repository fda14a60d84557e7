//! 2D vector helpers
//!
//! `Vector2` is glam's `Vec2`. Arithmetic, `dot` and copying come from glam;
//! this module adds the guarded normalization the simulation relies on.

pub use glam::Vec2 as Vector2;

/// Extra vector operations used by the simulation
pub trait Vector2Ext {
    /// Normalize in place. Each axis is only divided when it is non-zero,
    /// so the zero vector is left unchanged.
    fn normalize_guarded(&mut self);

    /// Guarded normalization returning a new vector
    fn normalized_guarded(self) -> Vector2;

    /// 2D cross product (z component of the 3D cross product)
    fn cross(self, other: Vector2) -> f32;
}

impl Vector2Ext for Vector2 {
    fn normalize_guarded(&mut self) {
        let magnitude = self.length();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return;
        }
        if self.x != 0.0 {
            self.x /= magnitude;
        }
        if self.y != 0.0 {
            self.y /= magnitude;
        }
    }

    #[inline]
    fn normalized_guarded(mut self) -> Vector2 {
        self.normalize_guarded();
        self
    }

    #[inline]
    fn cross(self, other: Vector2) -> f32 {
        self.perp_dot(other)
    }
}
