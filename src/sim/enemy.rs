//! Enemies
//!
//! Enemy variants share one struct and dispatch behavior on `EnemyKind`.
//! Health is a multiplication-table product and damage is only taken when it
//! divides the current health, so the player has to pick matching weapon damage.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chaser;
use super::entity::Sprite;
use super::hero::Hero;
use super::mover::Mover;
use crate::consts::*;
use crate::largest_divisor_up_to;
use crate::tuning::DifficultyContext;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Walks straight at the sensed target
    #[default]
    Chaser,
}

impl EnemyKind {
    /// Damage dealt to the hero per frame of contact
    pub fn contact_damage(self) -> i32 {
        match self {
            EnemyKind::Chaser => CHASER_CONTACT_DAMAGE,
        }
    }

    /// Minimum distance from the hero spawn placement tries to keep
    pub fn spawn_safe_distance(self) -> f32 {
        match self {
            EnemyKind::Chaser => SPAWN_SAFE_DISTANCE,
        }
    }
}

/// How incoming weapon damage is applied to enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageRule {
    /// Only damage that evenly divides current health lands
    #[default]
    Divisible,
    /// Every hit subtracts its damage
    Unconditional,
}

/// Fewest hits (at a single damage value from 1 to 10) that bring `health` to zero
pub fn minimum_hits(health: i32) -> i32 {
    health / largest_divisor_up_to(health, TABLE_MAX)
}

/// An enemy entity
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    mover: Mover,
    max_health: i32,
    /// Kill reward
    score: u32,
    /// Set when shot, cleared once knocked out of bounds
    pub is_hit: bool,
    /// Position of the target sensed this frame (never a reference to it)
    target: Option<Vec2>,
    damage_rule: DamageRule,
}

impl Enemy {
    /// Create an enemy with fixed health; stats are derived from it
    pub fn with_health(
        id: u32,
        kind: EnemyKind,
        sprite: Sprite,
        boundary: Vec2,
        health: i32,
        difficulty: &DifficultyContext,
        damage_rule: DamageRule,
    ) -> Self {
        let mut mover = Mover::new(sprite, boundary);
        mover.set_health(health);

        let hits = minimum_hits(health).max(1);
        mover.speed = difficulty.enemy_speed(hits);
        mover.entity.scale = Vec2::splat(BASE_SCALE + ENEMY_SCALE_PER_HIT * (hits - 1) as f32);

        Self {
            id,
            kind,
            mover,
            max_health: health,
            score: hits as u32,
            is_hit: false,
            target: None,
            damage_rule,
        }
    }

    /// Create an enemy with random table health, placed off-screen away from `avoid`
    #[allow(clippy::too_many_arguments)]
    pub fn spawn<R: Rng + ?Sized>(
        id: u32,
        kind: EnemyKind,
        sprite: Sprite,
        boundary: Vec2,
        difficulty: &DifficultyContext,
        damage_rule: DamageRule,
        avoid: Vec2,
        rng: &mut R,
    ) -> Self {
        let health = random_table_health(rng);
        let mut enemy = Self::with_health(id, kind, sprite, boundary, health, difficulty, damage_rule);
        enemy.place_offscreen(avoid, rng);
        enemy
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut Mover {
        &mut self.mover
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.mover.health()
    }

    #[inline]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.mover.is_dead()
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn compute_minimum_hits(&self) -> i32 {
        minimum_hits(self.health())
    }

    /// Put the enemy just outside a random arena side.
    ///
    /// Tries a bounded number of candidates to stay away from `avoid`; the
    /// last candidate is used if none is far enough.
    pub fn place_offscreen<R: Rng + ?Sized>(&mut self, avoid: Vec2, rng: &mut R) {
        let boundary = self.mover.boundary();
        let half = self.mover.dimensions() / 2.0;
        let safe_distance = self.kind.spawn_safe_distance();

        let mut center = Vec2::ZERO;
        for _ in 0..SPAWN_PLACEMENT_ATTEMPTS {
            center = match rng.random_range(0..4) {
                0 => Vec2::new(rng.random::<f32>() * boundary.x, -half.y),
                1 => Vec2::new(boundary.x + half.x, rng.random::<f32>() * boundary.y),
                2 => Vec2::new(rng.random::<f32>() * boundary.x, boundary.y + half.y),
                _ => Vec2::new(-half.x, rng.random::<f32>() * boundary.y),
            };
            if center.distance(avoid) >= safe_distance {
                break;
            }
        }
        self.mover.entity.center_on(center);
    }

    pub fn take_damage(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        match self.damage_rule {
            DamageRule::Divisible => {
                if self.health() % amount == 0 {
                    self.mover.take_damage(amount);
                }
            }
            DamageRule::Unconditional => self.mover.take_damage(amount),
        }
    }

    /// Knockback; tougher enemies are displaced less
    pub fn add_impulse(&mut self, velocity: Vec2) {
        let weight = (self.score.max(1) as f32 / 3.0).sqrt();
        self.mover.translate(velocity / weight);
    }

    /// Remember where the target is this frame
    pub fn on_sense(&mut self, target: &Mover) {
        self.target = Some(target.pos());
    }

    pub fn on_hero_collision(&self, hero: &mut Hero) {
        match self.kind {
            EnemyKind::Chaser => chaser::on_hero_collision(self, hero),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.is_hit && self.mover.is_out_of_bounds() {
            self.is_hit = false;
        }
        match self.kind {
            EnemyKind::Chaser => chaser::update(self, dt),
        }
    }
}

/// Random multiplication-table product in `1..=100`
pub fn random_table_health<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(1..=TABLE_MAX) * rng.random_range(1..=TABLE_MAX)
}
