//! # rust-brawl
//!
//! A small turn-based enemy card battle engine.
//!
//! Enemies are loaded from a catalog into a pool. The player selects
//! enemies into an active list, fights them with a d20 roll against the
//! enemy's roll plus level, and accumulates health and attack from rewards
//! and penalties.
//!
//! ## Design Principles
//!
//! 1. **One encoding per session**: Stats and effects are either plain
//!    numbers or glyph strings. An `EffectEncoder` chosen at construction
//!    interprets them; nothing else counts glyphs.
//!
//! 2. **Injectable randomness**: Selection and dice go through
//!    `RandomSource`, so fights replay exactly under a seed or a script.
//!
//! 3. **Misses are not errors**: An unknown id returns `None` and changes
//!    nothing. A draw is a real outcome, distinct from "no such enemy".
//!
//! ## Modules
//!
//! - `core`: Enemy ids, player state, RNG, configuration
//! - `effects`: Effect/stat values and encoders
//! - `cards`: Enemy records, enemies, catalog sources
//! - `roster`: Pool/active/defeated membership and the withdrawal log
//! - `combat`: Dice-based fight resolution
//! - `events`: Sinks that observe fight results
//! - `session`: The action surface tying it all together

pub mod core;
pub mod effects;
pub mod cards;
pub mod roster;
pub mod combat;
pub mod events;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EnemyId, IdAllocator,
    PlayerState, PlayerOverride,
    GameRng, RandomSource, ScriptedRng,
    EngineConfig,
};

pub use crate::effects::{
    Effect, Stat, Polarity, StatKind,
    EffectEncoder, Encoding, NumericEncoder, SymbolicEncoder,
};

pub use crate::cards::{Enemy, EnemyRecord, CatalogSource, JsonCatalog, StaticCatalog};

pub use crate::roster::{RosterManager, Zone};

pub use crate::combat::{CombatResolver, FightOutcome, FightResult, Roll, TieBreak};

pub use crate::events::{FightLog, FightSink, TracingSink};

pub use crate::session::{Session, SessionBuilder};

pub use crate::error::{CatalogError, ConfigError};
