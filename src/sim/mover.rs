//! Movers: entities with physics, health and an arena boundary

use glam::Vec2;

use super::collision::{Aabb, push_apart};
use super::entity::{Entity, Sprite};
use crate::consts::BASE_SPEED;

/// An entity that moves, collides and can be damaged
#[derive(Debug, Clone)]
pub struct Mover {
    pub entity: Entity,
    /// Arena extent; every mover in an arena carries the same value
    boundary: Vec2,
    health: i32,
    /// Movement speed (px per ms)
    pub speed: f32,
    pub velocity: Vec2,
}

impl Mover {
    pub fn new(sprite: Sprite, boundary: Vec2) -> Self {
        Self {
            entity: Entity::new(sprite),
            boundary,
            health: 1,
            speed: BASE_SPEED,
            velocity: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.entity.pos
    }

    #[inline]
    pub fn set_pos(&mut self, pos: Vec2) {
        self.entity.pos = pos;
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.entity.pos += delta;
    }

    #[inline]
    pub fn centered(&self) -> Vec2 {
        self.entity.centered()
    }

    #[inline]
    pub fn dimensions(&self) -> Vec2 {
        self.entity.dimensions()
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.entity.bounds()
    }

    #[inline]
    pub fn boundary(&self) -> Vec2 {
        self.boundary
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    pub(crate) fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Unconditional damage (variants may gate this)
    /// Health never rises: non-positive amounts are ignored
    pub fn take_damage(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.health = self.health.saturating_sub(amount);
    }

    pub fn overlaps(&self, other: &Mover) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    /// Push two overlapping movers apart, each by half the overlap
    pub fn resolve_collision(&mut self, other: &mut Mover) {
        let result = push_apart(&self.bounds(), &other.bounds());
        if result.hit {
            let push = result.normal * (result.penetration / 2.0);
            self.translate(push);
            other.translate(-push);
        }
    }

    /// True when the mover's center is on or outside the arena edge
    pub fn is_out_of_bounds(&self) -> bool {
        let c = self.centered();
        c.x <= 0.0 || c.x >= self.boundary.x || c.y <= 0.0 || c.y >= self.boundary.y
    }

    /// Snap the mover's center back inside `[0, boundary]`
    pub fn clamp_to_boundary(&mut self) {
        let center = self.centered().clamp(Vec2::ZERO, self.boundary);
        self.entity.center_on(center);
    }

    pub fn ray_intersects(&self, origin: Vec2, dir: Vec2) -> bool {
        self.bounds().ray_intersects(origin, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::SpriteHandle;

    fn mover_at(x: f32, y: f32) -> Mover {
        let sprite = Sprite::new(SpriteHandle(0), 16.0, 16.0).unwrap();
        let mut mover = Mover::new(sprite, Vec2::new(800.0, 600.0));
        mover.set_pos(Vec2::new(x, y));
        mover
    }

    #[test]
    fn test_overlap() {
        let a = mover_at(0.0, 0.0);
        assert!(a.overlaps(&mover_at(40.0, 40.0)));
        assert!(!a.overlaps(&mover_at(48.0, 0.0)));
    }

    #[test]
    fn test_resolve_collision_symmetric() {
        let mut a = mover_at(10.0, 0.0);
        let mut b = mover_at(0.0, 0.0);
        a.resolve_collision(&mut b);

        // 48 wide each, 10 apart: overlap 38 split evenly
        assert!((a.pos().x - 29.0).abs() < 1e-4);
        assert!((b.pos().x + 19.0).abs() < 1e-4);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_resolve_collision_coincident_is_finite() {
        let mut a = mover_at(100.0, 100.0);
        let mut b = mover_at(100.0, 100.0);
        a.resolve_collision(&mut b);

        assert!(a.pos().is_finite() && b.pos().is_finite());
        assert_eq!(a.pos(), Vec2::new(124.0, 100.0));
        assert_eq!(b.pos(), Vec2::new(76.0, 100.0));
    }

    #[test]
    fn test_resolve_collision_far_apart_noop() {
        let mut a = mover_at(0.0, 0.0);
        let mut b = mover_at(300.0, 0.0);
        a.resolve_collision(&mut b);
        assert_eq!(a.pos(), Vec2::ZERO);
        assert_eq!(b.pos(), Vec2::new(300.0, 0.0));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(!mover_at(100.0, 100.0).is_out_of_bounds());
        assert!(mover_at(-24.0, 100.0).is_out_of_bounds()); // center exactly on edge
        assert!(mover_at(100.0, 700.0).is_out_of_bounds());
    }

    #[test]
    fn test_clamp_snaps_center_to_edge() {
        let mut m = mover_at(-100.0, 590.0);
        m.clamp_to_boundary();
        assert_eq!(m.centered(), Vec2::new(0.0, 600.0));

        let mut inside = mover_at(100.0, 100.0);
        inside.clamp_to_boundary();
        assert_eq!(inside.pos(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_take_damage_unconditional() {
        let mut m = mover_at(0.0, 0.0);
        m.set_health(3);
        m.take_damage(2);
        assert_eq!(m.health(), 1);
        assert!(!m.is_dead());
        m.take_damage(2);
        assert!(m.is_dead());
    }

    #[test]
    fn test_negative_damage_does_not_heal() {
        let mut m = mover_at(0.0, 0.0);
        m.set_health(1);
        m.take_damage(-5);
        assert_eq!(m.health(), 1);
        m.take_damage(0);
        assert_eq!(m.health(), 1);
    }
}
