//! Effect system: reward/penalty values and the encoders that apply them.
//!
//! - `Effect`: a reward or penalty, numeric or symbolic
//! - `Stat`: a player stat in the same two representations
//! - `EffectEncoder`: applies effects to a `PlayerState`
//!
//! ## Design Philosophy
//!
//! A session picks exactly one encoding at construction. Everything that
//! interprets effect values goes through the encoder, so the roster and
//! combat layers stay encoding-agnostic.

mod effect;
mod encoder;

pub use effect::{Effect, Polarity, Stat, StatKind};
pub use encoder::{
    EffectEncoder, Encoding, NumericEncoder, SymbolicEncoder, DEFAULT_POWER_GLYPH,
    DEFAULT_VITALITY_GLYPH,
};
