//! The player-controlled hero

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::entity::Sprite;
use super::mover::Mover;
use super::vector::Vector2Ext;
use super::weapon::Weapon;

/// Movement intent for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Unit direction (diagonals normalized, opposing keys cancel)
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalized_guarded()
    }

    /// Combine with another intent (either source can request a direction)
    pub fn merge(&mut self, other: MoveIntent) {
        self.up |= other.up;
        self.down |= other.down;
        self.left |= other.left;
        self.right |= other.right;
    }
}

/// The hero
#[derive(Debug, Clone)]
pub struct Hero {
    mover: Mover,
    intent: MoveIntent,
    weapon: Weapon,
}

impl Hero {
    /// Create a hero standing in the middle of the arena
    pub fn new(sprite: Sprite, boundary: Vec2, health: i32, speed: f32, weapon: Weapon) -> Self {
        let mut mover = Mover::new(sprite, boundary);
        mover.set_health(health);
        mover.speed = speed;
        mover.entity.center_on(boundary / 2.0);

        Self {
            mover,
            intent: MoveIntent::default(),
            weapon,
        }
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut Mover {
        &mut self.mover
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.mover.is_dead()
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.mover.take_damage(amount);
    }

    pub fn change_weapon_damage(&mut self, damage: i32) {
        self.weapon.set_damage(damage);
    }

    pub fn move_up(&mut self) {
        self.intent.up = true;
    }

    pub fn move_down(&mut self) {
        self.intent.down = true;
    }

    pub fn move_left(&mut self) {
        self.intent.left = true;
    }

    pub fn move_right(&mut self) {
        self.intent.right = true;
    }

    pub fn steer(&mut self, intent: MoveIntent) {
        self.intent.merge(intent);
    }

    /// Fire at `aim` from the hero's center. Returns the score earned.
    pub fn shoot(&mut self, aim: Vec2, targets: &mut [Enemy]) -> u64 {
        let origin = self.mover.centered();
        let reach = self.mover.boundary().length();
        self.weapon.shoot(origin, aim, targets, reach)
    }

    /// Advance weapon timers, consume the movement intent and integrate
    pub fn update(&mut self, dt: f32) {
        self.weapon.update(dt);

        let intent = std::mem::take(&mut self.intent);
        self.mover.velocity = intent.direction() * self.mover.speed * dt;

        let velocity = self.mover.velocity;
        self.mover.translate(velocity);
        self.mover.clamp_to_boundary();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::SpriteHandle;

    const BOUNDARY: Vec2 = Vec2::new(800.0, 600.0);

    fn hero() -> Hero {
        let sprite = Sprite::new(SpriteHandle(0), 16.0, 16.0).unwrap();
        Hero::new(sprite, BOUNDARY, 3, 0.3, Weapon::default())
    }

    #[test]
    fn test_starts_centered() {
        let h = hero();
        assert_eq!(h.mover().centered(), Vec2::new(400.0, 300.0));
        assert_eq!(h.mover().health(), 3);
    }

    #[test]
    fn test_axial_movement() {
        let mut h = hero();
        h.move_right();
        h.update(100.0);
        assert!((h.mover().centered().x - 430.0).abs() < 1e-4);
        assert_eq!(h.mover().centered().y, 300.0);
    }

    #[test]
    fn test_diagonal_speed_matches_axial() {
        let mut h = hero();
        let start = h.mover().pos();
        h.move_up();
        h.move_left();
        h.update(100.0);
        let travelled = (h.mover().pos() - start).length();
        assert!((travelled - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_intent_resets_after_update() {
        let mut h = hero();
        h.move_down();
        h.update(10.0);
        let after_first = h.mover().pos();
        h.update(10.0);
        assert_eq!(h.mover().pos(), after_first);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut h = hero();
        let start = h.mover().pos();
        h.steer(MoveIntent {
            left: true,
            right: true,
            ..Default::default()
        });
        h.update(100.0);
        assert_eq!(h.mover().pos(), start);
    }

    #[test]
    fn test_clamped_to_boundary() {
        let mut h = hero();
        for _ in 0..100 {
            h.move_left();
            h.update(100.0);
        }
        assert_eq!(h.mover().centered().x, 0.0);
    }

    #[test]
    fn test_change_weapon_damage() {
        let mut h = hero();
        h.change_weapon_damage(7);
        assert_eq!(h.weapon().damage(), 7);
    }

    #[test]
    fn test_health_never_rises() {
        let mut h = hero();
        h.take_damage(-5);
        assert_eq!(h.mover().health(), 3);
        h.take_damage(1);
        assert_eq!(h.mover().health(), 2);
    }
}
