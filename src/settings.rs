//! Arena configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Configs are validated before an arena is built from them.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{DamageRule, Sprite, SpriteError, SpriteHandle, Weapon};
use crate::tuning::Tuning;

/// Errors raised while loading or validating a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid sprite: {0}")]
    Sprite(#[from] SpriteError),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

/// Sprite binding as written in a config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteConfig {
    pub handle: u32,
    /// Unscaled pixel size
    pub width: f32,
    pub height: f32,
}

impl SpriteConfig {
    pub fn to_sprite(&self) -> Result<Sprite, SpriteError> {
        Sprite::new(SpriteHandle(self.handle), self.width, self.height)
    }
}

/// Hero settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub health: i32,
    /// px per ms
    pub speed: f32,
    pub sprite: SpriteConfig,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            health: HERO_HEALTH,
            speed: BASE_SPEED,
            sprite: SpriteConfig {
                handle: 0,
                width: 16.0,
                height: 16.0,
            },
        }
    }
}

/// Weapon settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub damage: i32,
    pub shot_interval_ms: f32,
    pub hit_depth: usize,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            damage: WEAPON_DAMAGE,
            shot_interval_ms: SHOT_INTERVAL_MS,
            hit_depth: HIT_DEPTH,
        }
    }
}

impl WeaponConfig {
    pub fn build(&self) -> Weapon {
        Weapon::new(self.damage, self.shot_interval_ms, self.hit_depth)
    }
}

/// Complete arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    /// RNG seed for spawns
    pub seed: u64,
    pub enemies_at_start: usize,
    pub max_enemies: usize,
    pub spawn_interval_ms: f32,
    pub hero: HeroConfig,
    pub weapon: WeaponConfig,
    pub chaser_sprite: SpriteConfig,
    pub tuning: Tuning,
    pub damage_rule: DamageRule,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            seed: 0x7AF3_1A4E,
            enemies_at_start: ENEMIES_AT_START,
            max_enemies: MAX_ENEMIES,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            hero: HeroConfig::default(),
            weapon: WeaponConfig::default(),
            chaser_sprite: SpriteConfig {
                handle: 1,
                width: 16.0,
                height: 16.0,
            },
            tuning: Tuning::default(),
            damage_rule: DamageRule::default(),
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded arena config from {}", path.display());
        Ok(config)
    }

    pub fn boundary(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn out_of_range(field: &'static str, value: impl ToString) -> ConfigError {
            ConfigError::OutOfRange {
                field,
                value: value.to_string(),
            }
        }

        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(out_of_range("width", self.width));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(out_of_range("height", self.height));
        }
        if self.max_enemies == 0 {
            return Err(out_of_range("max_enemies", self.max_enemies));
        }
        if !(self.spawn_interval_ms.is_finite() && self.spawn_interval_ms >= 0.0) {
            return Err(out_of_range("spawn_interval_ms", self.spawn_interval_ms));
        }
        if self.hero.health <= 0 {
            return Err(out_of_range("hero.health", self.hero.health));
        }
        if !(self.hero.speed.is_finite() && self.hero.speed >= 0.0) {
            return Err(out_of_range("hero.speed", self.hero.speed));
        }
        if !(1..=MAX_WEAPON_DAMAGE).contains(&self.weapon.damage) {
            return Err(out_of_range("weapon.damage", self.weapon.damage));
        }
        if !(self.weapon.shot_interval_ms.is_finite() && self.weapon.shot_interval_ms >= 0.0) {
            return Err(out_of_range(
                "weapon.shot_interval_ms",
                self.weapon.shot_interval_ms,
            ));
        }
        if self.weapon.hit_depth == 0 {
            return Err(out_of_range("weapon.hit_depth", self.weapon.hit_depth));
        }
        if !(self.tuning.difficulty.is_finite() && self.tuning.difficulty > 0.0) {
            return Err(out_of_range("tuning.difficulty", self.tuning.difficulty));
        }
        if !(self.tuning.game_speed_base.is_finite() && self.tuning.game_speed_base > 0.0) {
            return Err(out_of_range(
                "tuning.game_speed_base",
                self.tuning.game_speed_base,
            ));
        }
        self.hero.sprite.to_sprite()?;
        self.chaser_sprite.to_sprite()?;
        Ok(())
    }
}
