//! Per-frame simulation step
//!
//! Frame order: input → tick → render. Within a tick: time dilation, high
//! score, game-over check, spawn timer, hero, enemies, difficulty.

use glam::Vec2;

use super::hero::MoveIntent;
use super::state::{ArenaState, GamePhase};
use crate::pair_mut;
use crate::tuning::DifficultyContext;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Edge-triggered continue/restart request
    pub restart: bool,
    /// Level-triggered fire request
    pub fire: bool,
    /// Aim point (cursor position)
    pub aim: Vec2,
    /// Held movement directions
    pub movement: MoveIntent,
    /// Newly selected weapon damage
    pub weapon_damage: Option<i32>,
}

/// Apply one frame of input
pub fn apply_input(state: &mut ArenaState, input: &FrameInput) {
    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                state.restart();
            }
        }
        GamePhase::Playing => {
            if let Some(damage) = input.weapon_damage {
                state.hero.change_weapon_damage(damage);
            }
            if input.fire {
                let gained = state.hero.shoot(input.aim, &mut state.enemies);
                state.score += gained;
            }
            state.hero.steer(input.movement);
        }
    }
}

/// Advance the arena by `dt` milliseconds of wall time.
///
/// Always returns true: game over is a phase, not a reason to stop the loop.
pub fn tick(state: &mut ArenaState, dt: f32) -> bool {
    let dt = state.difficulty.scale_dt(dt);

    if state.high_score.record(state.score) {
        log::debug!("new high score {}", state.score);
    }

    if state.hero.is_dead() {
        if state.phase != GamePhase::GameOver {
            state.phase = GamePhase::GameOver;
            log::info!(
                "Game over: score {} (high score {}{})",
                state.score,
                state.high_score.best(),
                if state.high_score.is_new() { ", new" } else { "" }
            );
        }
        return true;
    }

    state.time_to_next_spawn -= dt;
    if state.time_to_next_spawn < 0.0 {
        state.spawn_enemy();
        state.time_to_next_spawn = state.spawn_interval;
    }

    state.hero.update(dt);
    update_enemies(state, dt);

    state.difficulty = DifficultyContext::for_score(state.score, &state.tuning);
    true
}

/// Drop dead enemies, then move, sense and collide every survivor exactly once
fn update_enemies(state: &mut ArenaState, dt: f32) {
    let before = state.enemies.len();
    state.enemies.retain(|e| !e.is_dead());
    if state.enemies.len() != before {
        log::debug!("removed {} dead enemies", before - state.enemies.len());
    }

    let hero = &mut state.hero;
    let enemies = &mut state.enemies;
    for i in 0..enemies.len() {
        let enemy = &mut enemies[i];
        enemy.update(dt);
        enemy.on_sense(hero.mover());
        if hero.mover().overlaps(enemy.mover()) {
            enemy.on_hero_collision(hero);
        }

        for j in 0..enemies.len() {
            if j == i {
                continue;
            }
            let (a, b) = pair_mut(enemies, i, j);
            a.mover_mut().resolve_collision(b.mover_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT_MS;
    use crate::settings::ArenaConfig;

    fn state_with(config: ArenaConfig) -> ArenaState {
        ArenaState::new(&config).unwrap()
    }

    fn test_config() -> ArenaConfig {
        ArenaConfig {
            hero: crate::settings::HeroConfig {
                health: 3,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn enemy_positions(state: &ArenaState) -> Vec<Vec2> {
        state.enemies.iter().map(|e| e.mover().pos()).collect()
    }

    #[test]
    fn test_game_over_freezes_enemies() {
        let mut state = state_with(test_config());
        // Let the chasers lock on and start moving
        tick(&mut state, FRAME_DT_MS);
        tick(&mut state, FRAME_DT_MS);

        for _ in 0..3 {
            let enemy = state.enemies[0].clone();
            enemy.on_hero_collision(&mut state.hero);
        }
        assert!(state.hero.is_dead());

        let frozen = enemy_positions(&state);
        assert!(tick(&mut state, FRAME_DT_MS));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(enemy_positions(&state), frozen);

        tick(&mut state, FRAME_DT_MS);
        assert_eq!(enemy_positions(&state), frozen);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = state_with(test_config());
        state.score = 17;
        tick(&mut state, FRAME_DT_MS);
        state.hero.take_damage(100);
        tick(&mut state, FRAME_DT_MS);
        assert_eq!(state.phase, GamePhase::GameOver);

        apply_input(
            &mut state,
            &FrameInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies.len(), state.enemies_at_start);
        assert!(!state.hero.is_dead());
        assert_eq!(state.high_score.best(), 17);
        assert!(!state.high_score.is_new());
    }

    #[test]
    fn test_chasers_need_a_sensed_target_first() {
        let mut state = state_with(ArenaConfig {
            enemies_at_start: 1,
            ..test_config()
        });
        let start = enemy_positions(&state);
        tick(&mut state, FRAME_DT_MS);
        // First frame: update runs before sensing, so nobody moves yet
        assert_eq!(enemy_positions(&state), start);

        tick(&mut state, FRAME_DT_MS);
        let hero = state.hero.mover().pos();
        for (before, enemy) in start.iter().zip(&state.enemies) {
            let after = enemy.mover().pos();
            assert!(after.distance(hero) < before.distance(hero));
        }
    }

    #[test]
    fn test_dead_enemies_removed_next_frame() {
        let mut state = state_with(test_config());
        let victim = state.enemies[0].id;
        let health = state.enemies[0].health();
        state.enemies[0].take_damage(health);
        assert!(state.enemies[0].is_dead());

        tick(&mut state, FRAME_DT_MS);
        assert_eq!(state.enemies.len(), state.enemies_at_start - 1);
        assert!(state.enemies.iter().all(|e| e.id != victim));
    }

    #[test]
    fn test_spawn_timer() {
        let mut state = state_with(test_config());
        let start = state.enemies.len();
        let interval = state.spawn_interval;

        tick(&mut state, interval - 1.0);
        assert_eq!(state.enemies.len(), start);

        tick(&mut state, 2.0);
        assert_eq!(state.enemies.len(), start + 1);
        assert_eq!(state.time_to_next_spawn, interval);
    }

    #[test]
    fn test_spawn_timer_respects_cap() {
        let mut state = state_with(ArenaConfig {
            enemies_at_start: 2,
            max_enemies: 2,
            ..test_config()
        });
        let interval = state.spawn_interval;
        tick(&mut state, interval + 1.0);
        assert_eq!(state.enemies.len(), 2);
    }

    #[test]
    fn test_overlapping_enemies_get_separated() {
        let mut state = state_with(ArenaConfig {
            enemies_at_start: 2,
            ..test_config()
        });
        let spot = Vec2::new(100.0, 100.0);
        for enemy in &mut state.enemies {
            enemy.mover_mut().entity.center_on(spot);
        }
        tick(&mut state, FRAME_DT_MS);

        let a = state.enemies[0].mover();
        let b = state.enemies[1].mover();
        assert!(a.pos().is_finite() && b.pos().is_finite());
        assert!(a.centered().distance(b.centered()) > 0.0);
    }

    #[test]
    fn test_hero_contact_damage() {
        let mut state = state_with(ArenaConfig {
            enemies_at_start: 1,
            ..test_config()
        });
        let hero_center = state.hero.mover().centered();
        state.enemies[0].mover_mut().entity.center_on(hero_center);

        tick(&mut state, FRAME_DT_MS);
        assert_eq!(state.hero.mover().health(), 2);
    }

    #[test]
    fn test_score_raises_game_speed() {
        let mut state = state_with(test_config());
        let before = state.difficulty.game_speed;
        state.score = 50;
        tick(&mut state, FRAME_DT_MS);
        assert!(state.difficulty.game_speed > before);
        assert!(state.high_score.is_new());
        assert_eq!(state.high_score.best(), 50);
    }

    #[test]
    fn test_fire_input_scores_kills() {
        let mut state = state_with(ArenaConfig {
            enemies_at_start: 1,
            ..test_config()
        });
        // Weapon becomes ready after its first countdown
        tick(&mut state, FRAME_DT_MS);

        let target = Vec2::new(900.0, 360.0);
        let reward = state.enemies[0].score();
        state.enemies[0].mover_mut().entity.center_on(target);
        state.enemies[0].mover_mut().set_health(1);

        apply_input(
            &mut state,
            &FrameInput {
                fire: true,
                aim: target,
                ..Default::default()
            },
        );
        assert_eq!(state.score, u64::from(reward));
        assert!(state.enemies[0].is_dead());
    }

    #[test]
    fn test_weapon_damage_selection() {
        let mut state = state_with(test_config());
        apply_input(
            &mut state,
            &FrameInput {
                weapon_damage: Some(6),
                ..Default::default()
            },
        );
        assert_eq!(state.hero.weapon().damage(), 6);
    }
}
