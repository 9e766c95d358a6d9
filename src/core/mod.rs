//! Core engine types: enemy ids, player state, RNG, configuration.
//!
//! These are the building blocks the roster, combat and session layers
//! share.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;

pub use entity::{EnemyId, IdAllocator};
pub use player::{PlayerOverride, PlayerState};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{EngineConfig, DEFAULT_STARTING_ATTACK, DEFAULT_STARTING_HEALTH};
