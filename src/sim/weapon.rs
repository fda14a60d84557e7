//! Fire-rate limited hitscan weapon
//!
//! The weapon is ready when its countdown is below zero. A shot resets the
//! countdown, damages the nearest enemies on the ray and leaves short-lived
//! tracer segments for rendering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::projectile::{Projectile, Ray};
use super::vector::Vector2Ext;
use crate::consts::*;

/// A visible shot segment (render only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tracer {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Debug, Clone)]
pub struct Weapon {
    damage: i32,
    /// Cooldown between shots (ms)
    shot_interval: f32,
    /// Countdown to the next shot (ms); negative means ready
    time_to_next_shot: f32,
    /// How many enemies one shot can pierce
    hit_depth: usize,
    tracers: Vec<Tracer>,
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(WEAPON_DAMAGE, SHOT_INTERVAL_MS, HIT_DEPTH)
    }
}

impl Weapon {
    pub fn new(damage: i32, shot_interval: f32, hit_depth: usize) -> Self {
        Self {
            damage: damage.clamp(1, MAX_WEAPON_DAMAGE),
            shot_interval: shot_interval.max(0.0),
            time_to_next_shot: 0.0,
            hit_depth,
            tracers: Vec::new(),
        }
    }

    #[inline]
    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn set_damage(&mut self, damage: i32) {
        self.damage = damage.clamp(1, MAX_WEAPON_DAMAGE);
    }

    #[inline]
    pub fn can_shoot(&self) -> bool {
        self.time_to_next_shot < 0.0
    }

    pub fn tracers(&self) -> &[Tracer] {
        &self.tracers
    }

    /// Fire from `origin` toward `aim`, returning the score of enemies killed.
    ///
    /// A miss leaves one tracer of length `reach`. Shooting while cooling down
    /// or with `aim == origin` does nothing.
    pub fn shoot(&mut self, origin: Vec2, aim: Vec2, targets: &mut [Enemy], reach: f32) -> u64 {
        if !self.can_shoot() {
            return 0;
        }
        let direction = (aim - origin).normalized_guarded();
        if direction == Vec2::ZERO {
            return 0;
        }

        self.time_to_next_shot = self.shot_interval;

        let ray = Ray::new(origin, direction);
        let projectile = Projectile::new(ray, self.damage, self.hit_depth);
        let hits = projectile.calculate_hits(targets);

        self.tracers.clear();
        if hits.is_empty() {
            self.tracers.push(Tracer {
                from: origin,
                to: ray.point_at(reach),
            });
            return 0;
        }

        let mut combined_score = 0;
        for hit in &hits {
            let target = &mut targets[hit.index];
            target.is_hit = true;
            target.add_impulse(direction * KNOCKBACK_STRENGTH);
            target.take_damage(projectile.damage);
            if target.is_dead() {
                combined_score += u64::from(target.score());
                log::debug!("enemy {} killed (+{})", target.id, target.score());
            }

            self.tracers.push(Tracer {
                from: origin,
                to: ray.point_at(hit.distance),
            });
        }

        combined_score
    }

    /// Count down the cooldown and expire tracers
    pub fn update(&mut self, dt: f32) {
        self.time_to_next_shot -= dt;
        if self.time_to_next_shot < self.shot_interval - TRACER_LIFETIME_MS {
            self.tracers.clear();
        }
    }
}
