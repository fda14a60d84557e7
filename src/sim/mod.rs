//! Frame-synchronous simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only advances through `tick(dt)`
//! - Seeded RNG only
//! - Stable iteration order (enemies keep insertion order)
//! - No rendering or platform dependencies

pub mod chaser;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod hero;
pub mod mover;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod vector;
pub mod weapon;

pub use collision::{Aabb, CollisionResult, push_apart};
pub use enemy::{DamageRule, Enemy, EnemyKind, minimum_hits};
pub use entity::{Entity, Sprite, SpriteError, SpriteHandle};
pub use hero::{Hero, MoveIntent};
pub use mover::Mover;
pub use projectile::{Projectile, ProjectileHit, Ray};
pub use state::{ArenaState, GamePhase};
pub use tick::{FrameInput, apply_input, tick};
pub use vector::{Vector2, Vector2Ext};
pub use weapon::{Tracer, Weapon};
