//! Tafel Arena - a top-down multiplication-table arena shooter
//!
//! Core modules:
//! - `sim`: Frame-synchronous simulation (movement, collisions, combat, game state)
//! - `arena`: Driver-facing orchestrator (`process_input` → `update` → `render`)
//! - `platform`: Input source abstraction and key/button edge tracking
//! - `renderer`: Scene drawing onto an external drawing surface
//! - `tuning`: Difficulty curves shared by every entity
//! - `settings`: Arena configuration
//! - `highscores`: In-memory high score

pub mod arena;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use arena::Arena;
pub use highscores::HighScore;
pub use settings::{ArenaConfig, ConfigError};
pub use tuning::DifficultyContext;

/// Game configuration constants
pub mod consts {
    /// Default arena extent (pixels)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Default frame time for drivers without a real clock (ms)
    pub const FRAME_DT_MS: f32 = 1000.0 / 60.0;

    /// Sprite scale applied to every entity (pixel art is drawn at 3x)
    pub const BASE_SCALE: f32 = 3.0;
    /// Extra enemy scale per required hit above one
    pub const ENEMY_SCALE_PER_HIT: f32 = 0.15;

    /// Default mover speed (px per ms)
    pub const BASE_SPEED: f32 = 0.3;
    /// Enemy speed before difficulty and toughness are applied (px per ms)
    pub const ENEMY_BASE_SPEED: f32 = 0.2;

    /// Enemy population
    pub const ENEMIES_AT_START: usize = 7;
    pub const MAX_ENEMIES: usize = 32;
    pub const SPAWN_INTERVAL_MS: f32 = 300.0;

    /// Spawn placement tries to stay at least this far from the hero
    pub const SPAWN_SAFE_DISTANCE: f32 = 500.0;
    pub const SPAWN_PLACEMENT_ATTEMPTS: u32 = 10;

    /// Weapon defaults
    pub const WEAPON_DAMAGE: i32 = 1;
    pub const MAX_WEAPON_DAMAGE: i32 = 10;
    pub const SHOT_INTERVAL_MS: f32 = 150.0;
    pub const HIT_DEPTH: usize = 1;
    /// Tracers disappear this long after the shot, regardless of fire rate
    pub const TRACER_LIFETIME_MS: f32 = 50.0;
    /// Knockback applied along the shot direction
    pub const KNOCKBACK_STRENGTH: f32 = 10.0;

    /// Hero defaults
    pub const HERO_HEALTH: i32 = 1;
    /// Damage a chaser deals to the hero per frame of contact
    pub const CHASER_CONTACT_DAMAGE: i32 = 1;

    /// Difficulty curve
    pub const BASE_DIFFICULTY: f32 = 1.5;
    pub const GAME_SPEED_BASE: f32 = 1.0;
    pub const GAME_SPEED_SCORE_DIVISOR: f32 = 50.0;

    /// Multiplication table bounds for enemy health and damage choices
    pub const TABLE_MAX: i32 = 10;
}

/// Borrow two distinct elements of a slice mutably.
///
/// Panics if `a == b` or either index is out of bounds.
#[inline]
pub fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b, "pair_mut requires distinct indices");
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

/// Largest divisor of `value` in `1..=limit` (1 when nothing larger divides it)
#[inline]
pub fn largest_divisor_up_to(value: i32, limit: i32) -> i32 {
    (1..=limit.max(1))
        .rev()
        .find(|d| value % d == 0)
        .unwrap_or(1)
}
