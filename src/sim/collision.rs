//! Collision detection and response for axis-aligned boxes
//!
//! Every mover is an axis-aligned bounding box. The same slab test is used for
//! weapon hit detection, so it has to be exact about rays that start inside a
//! box or run parallel to one of its edges.

use glam::Vec2;

use super::vector::Vector2Ext;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True if the boxes intersect on both axes (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        other.max.x > self.min.x
            && other.min.x < self.max.x
            && other.max.y > self.min.y
            && other.min.y < self.max.y
    }

    /// Slab test: does the ray from `origin` along `dir` hit this box?
    ///
    /// Only the part of the ray at or ahead of the origin counts, so a box
    /// behind the origin is missed and a box containing it is hit.
    pub fn ray_intersects(&self, origin: Vec2, dir: Vec2) -> bool {
        let mut near = f32::NEG_INFINITY;
        let mut far = f32::INFINITY;

        for axis in 0..2 {
            let (o, d, lo, hi) = (origin[axis], dir[axis], self.min[axis], self.max[axis]);
            if d == 0.0 {
                // Parallel to this slab: inside it or never
                if o < lo || o > hi {
                    return false;
                }
                continue;
            }
            let inv = 1.0 / d;
            let t0 = (lo - o) * inv;
            let t1 = (hi - o) * inv;
            near = near.max(t0.min(t1));
            far = far.min(t0.max(t1));
        }

        far >= near.max(0.0)
    }
}

/// Result of a push-apart check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the boxes are closer than their combined half-widths
    pub hit: bool,
    /// Unit normal pointing from `b` toward `a`
    pub normal: Vec2,
    /// How far the centers must move apart in total
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Circular push-apart check between two boxes
///
/// Boxes are treated as discs whose diameter is their width. When the centers
/// coincide the normal is undefined, so +X is used to keep the response finite
/// and deterministic.
pub fn push_apart(a: &Aabb, b: &Aabb) -> CollisionResult {
    let between = a.center() - b.center();
    let distance = between.length();
    let min_distance = (a.size().x + b.size().x) / 2.0;

    if distance >= min_distance {
        return CollisionResult::miss();
    }

    let normal = if distance > f32::EPSILON {
        between.normalized_guarded()
    } else {
        Vec2::X
    };

    CollisionResult {
        hit: true,
        normal,
        penetration: min_distance - distance,
    }
}
