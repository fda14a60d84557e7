//! Instantaneous hitscan projectiles

use std::cmp::Ordering;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;

/// A ray from `origin` along a unit `direction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// An enemy struck by a projectile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileHit {
    /// Index into the target slice
    pub index: usize,
    /// Distance from the ray origin to the enemy's center
    pub distance: f32,
}

/// A single shot: one ray that pierces up to `hit_depth` enemies
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub ray: Ray,
    pub damage: i32,
    pub hit_depth: usize,
}

impl Projectile {
    pub fn new(ray: Ray, damage: i32, hit_depth: usize) -> Self {
        Self {
            ray,
            damage,
            hit_depth,
        }
    }

    /// Enemies on the ray, nearest first, trimmed to the hit depth
    pub fn calculate_hits(&self, targets: &[Enemy]) -> Vec<ProjectileHit> {
        let mut hits: Vec<ProjectileHit> = targets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.mover().ray_intersects(self.ray.origin, self.ray.direction))
            .map(|(index, t)| ProjectileHit {
                index,
                distance: t.mover().centered().distance(self.ray.origin),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });
        hits.truncate(self.hit_depth);
        hits
    }
}
