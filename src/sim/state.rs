//! Arena state and core simulation types
//!
//! Everything one run needs lives here: hero, enemies, score, spawn timer and
//! the difficulty values entities read during the frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{DamageRule, Enemy, EnemyKind};
use super::entity::Sprite;
use super::hero::Hero;
use crate::highscores::HighScore;
use crate::settings::{ArenaConfig, ConfigError, HeroConfig, WeaponConfig};
use crate::tuning::{DifficultyContext, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Hero died; waiting for a restart request
    GameOver,
}

/// Sprites bound at arena creation
#[derive(Debug, Clone, Copy)]
pub struct SpriteSet {
    pub hero: Sprite,
    pub chaser: Sprite,
}

/// Complete arena state
#[derive(Debug, Clone)]
pub struct ArenaState {
    pub phase: GamePhase,
    /// Arena extent
    pub boundary: Vec2,
    pub hero: Hero,
    /// Active enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub score: u64,
    pub high_score: HighScore,
    pub spawn_interval: f32,
    /// Countdown to the next spawn (ms)
    pub time_to_next_spawn: f32,
    pub enemies_at_start: usize,
    pub max_enemies: usize,
    /// Written once per frame by `tick`, read by everything else
    pub difficulty: DifficultyContext,
    pub tuning: Tuning,
    pub damage_rule: DamageRule,
    pub sprites: SpriteSet,
    hero_config: HeroConfig,
    weapon_config: WeaponConfig,
    rng: Pcg32,
    next_id: u32,
}

impl ArenaState {
    /// Build a fresh arena with its starting enemies
    pub fn new(config: &ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sprites = SpriteSet {
            hero: config.hero.sprite.to_sprite()?,
            chaser: config.chaser_sprite.to_sprite()?,
        };
        let boundary = config.boundary();
        let hero = Self::build_hero(&config.hero, &config.weapon, sprites.hero, boundary);

        let mut state = Self {
            phase: GamePhase::Playing,
            boundary,
            hero,
            enemies: Vec::with_capacity(config.max_enemies),
            score: 0,
            high_score: HighScore::new(),
            spawn_interval: config.spawn_interval_ms,
            time_to_next_spawn: config.spawn_interval_ms,
            enemies_at_start: config.enemies_at_start,
            max_enemies: config.max_enemies,
            difficulty: DifficultyContext::for_score(0, &config.tuning),
            tuning: config.tuning,
            damage_rule: config.damage_rule,
            sprites,
            hero_config: config.hero,
            weapon_config: config.weapon,
            rng: Pcg32::seed_from_u64(config.seed),
            next_id: 1,
        };
        state.initialize_enemies();
        Ok(state)
    }

    fn build_hero(hero: &HeroConfig, weapon: &WeaponConfig, sprite: Sprite, boundary: Vec2) -> Hero {
        Hero::new(sprite, boundary, hero.health, hero.speed, weapon.build())
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Replace the enemy set with the starting wave
    pub fn initialize_enemies(&mut self) {
        self.enemies.clear();
        for _ in 0..self.enemies_at_start {
            self.spawn_enemy();
        }
    }

    /// Spawn one chaser off-screen, away from the hero. No-op at the cap.
    pub fn spawn_enemy(&mut self) {
        if self.enemies.len() >= self.max_enemies {
            return;
        }
        let id = self.next_entity_id();
        let avoid = self.hero.mover().centered();
        let enemy = Enemy::spawn(
            id,
            EnemyKind::Chaser,
            self.sprites.chaser,
            self.boundary,
            &self.difficulty,
            self.damage_rule,
            avoid,
            &mut self.rng,
        );
        log::debug!(
            "spawned enemy {} (health {}, reward {}) at {:?}",
            id,
            enemy.health(),
            enemy.score(),
            enemy.mover().pos()
        );
        self.enemies.push(enemy);
    }

    pub fn respawn_hero(&mut self) {
        self.hero = Self::build_hero(
            &self.hero_config,
            &self.weapon_config,
            self.sprites.hero,
            self.boundary,
        );
    }

    /// Start a new run; the high score survives
    pub fn restart(&mut self) {
        self.respawn_hero();
        self.score = 0;
        self.high_score.start_run();
        self.difficulty = DifficultyContext::for_score(0, &self.tuning);
        self.time_to_next_spawn = self.spawn_interval;
        self.initialize_enemies();
        self.phase = GamePhase::Playing;
        log::info!("Run restarted (high score {})", self.high_score.best());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = ArenaState::new(&ArenaConfig::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies.len(), crate::consts::ENEMIES_AT_START);
        assert!(state.hero.mover().health() > 0);
        assert_eq!(state.score, 0);

        // IDs are unique and ascending
        let ids: Vec<u32> = state.enemies.iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_spawn_respects_cap() {
        let config = ArenaConfig {
            enemies_at_start: 3,
            max_enemies: 4,
            ..Default::default()
        };
        let mut state = ArenaState::new(&config).unwrap();
        state.spawn_enemy();
        assert_eq!(state.enemies.len(), 4);
        state.spawn_enemy();
        assert_eq!(state.enemies.len(), 4);
    }

    #[test]
    fn test_spawns_are_reproducible() {
        let a = ArenaState::new(&ArenaConfig::default()).unwrap();
        let b = ArenaState::new(&ArenaConfig::default()).unwrap();
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.mover().pos(), eb.mover().pos());
            assert_eq!(ea.health(), eb.health());
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ArenaConfig {
            max_enemies: 0,
            ..Default::default()
        };
        assert!(ArenaState::new(&config).is_err());
    }
}
