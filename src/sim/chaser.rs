//! Chaser behavior: straight-line pursuit of the sensed target

use super::enemy::Enemy;
use super::hero::Hero;
use super::vector::Vector2Ext;

pub(super) fn update(enemy: &mut Enemy, dt: f32) {
    let Some(target) = enemy.target() else {
        return;
    };
    let mover = enemy.mover_mut();
    let direction = (target - mover.pos()).normalized_guarded();
    let step = direction * mover.speed * dt;
    mover.translate(step);
}

pub(super) fn on_hero_collision(enemy: &Enemy, hero: &mut Hero) {
    hero.take_damage(enemy.kind.contact_damage());
}
