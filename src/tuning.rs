//! Data-driven game balance
//!
//! Difficulty is coupled directly to score: the arena recomputes a
//! `DifficultyContext` once per frame and threads it into every entity that
//! needs it. Nothing else writes it.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs loaded with the arena config
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scales enemy speed at spawn
    pub difficulty: f32,
    /// Game speed at score 0
    pub game_speed_base: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            difficulty: BASE_DIFFICULTY,
            game_speed_base: GAME_SPEED_BASE,
        }
    }
}

/// Per-frame difficulty values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyContext {
    /// Time dilation applied to every frame's `dt`
    pub game_speed: f32,
    pub difficulty: f32,
}

impl Default for DifficultyContext {
    fn default() -> Self {
        Self::for_score(0, &Tuning::default())
    }
}

impl DifficultyContext {
    pub fn for_score(score: u64, tuning: &Tuning) -> Self {
        Self {
            game_speed: game_speed_for_score(score, tuning.game_speed_base),
            difficulty: tuning.difficulty,
        }
    }

    /// Frame time after time dilation
    #[inline]
    pub fn scale_dt(&self, dt: f32) -> f32 {
        dt * self.game_speed
    }

    /// Spawn speed for an enemy needing `minimum_hits` hits (px per ms)
    pub fn enemy_speed(&self, minimum_hits: i32) -> f32 {
        ENEMY_BASE_SPEED * self.difficulty / minimum_hits.max(1) as f32
    }
}

/// `sqrt(score / 50) + base`, increasing in score.
///
/// Computed in f64 so neighbouring scores stay distinct well past any
/// reachable total; the f32 result can still tie at astronomic scores.
pub fn game_speed_for_score(score: u64, base: f32) -> f32 {
    let speed = (score as f64 / f64::from(GAME_SPEED_SCORE_DIVISOR)).sqrt();
    (speed + f64::from(base)) as f32
}
