//! Effect encoders.
//!
//! An encoder turns a reward or penalty into stat changes. The combat
//! resolver only talks to the [`EffectEncoder`] trait, so glyph counting
//! and numeric clamping live here and nowhere else.
//!
//! ## Numeric
//!
//! One scalar drives both stats: a reward adds it to health and attack, a
//! penalty subtracts it from both. Results never drop below 0.
//!
//! ## Symbolic
//!
//! Stats and effects are glyph strings. The number of vitality glyphs in an
//! effect is the health delta, the number of power glyphs is the attack
//! delta. Penalties remove at most as many glyphs as the stat holds.
//!
//! ```
//! use rust_brawl::core::PlayerState;
//! use rust_brawl::effects::{Effect, EffectEncoder, Polarity, Stat, SymbolicEncoder};
//!
//! let encoder = SymbolicEncoder::new("h", "s");
//! let mut player = PlayerState::new(Stat::from("hh"), Stat::from(""));
//!
//! encoder.apply_effect(&mut player, &Effect::from("hss"), Polarity::Reward);
//! assert_eq!(player.health, Stat::from("hhh"));
//! assert_eq!(encoder.power_units(&player.attack), 2);
//!
//! encoder.apply_effect(&mut player, &Effect::from("hhhhh"), Polarity::Penalty);
//! assert_eq!(player.health, Stat::from(""));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::effect::{Effect, Polarity, Stat, StatKind};
use crate::core::PlayerState;

/// Default glyph for one unit of health.
pub const DEFAULT_VITALITY_GLYPH: &str = "\u{2764}\u{fe0f}";

/// Default glyph for one unit of attack.
pub const DEFAULT_POWER_GLYPH: &str = "\u{2694}\u{fe0f}";

/// Which encoder a session uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Numeric,
    Symbolic,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Numeric => f.write_str("numeric"),
            Encoding::Symbolic => f.write_str("symbolic"),
        }
    }
}

/// Converts effects into player stat changes.
///
/// Implementations never fail: a value in the other encoding's
/// representation reads as zero units.
pub trait EffectEncoder: std::fmt::Debug {
    /// The encoding this encoder implements.
    fn encoding(&self) -> Encoding;

    /// Apply `effect` to one stat and return the new value.
    fn apply_to_stat(&self, stat: &Stat, kind: StatKind, effect: &Effect, polarity: Polarity) -> Stat;

    /// Attack units used as the player's combat modifier.
    fn power_units(&self, attack: &Stat) -> i64;

    /// Build a stat holding `units` units.
    fn starting_stat(&self, kind: StatKind, units: i64) -> Stat;

    /// Convert a catalog effect into this encoding.
    ///
    /// Returns `None` if the effect has no meaning here.
    fn normalize(&self, effect: &Effect) -> Option<Effect>;

    /// Apply an effect to health and attack, then log it.
    ///
    /// The raw effect is logged even when the stat change was clamped.
    fn apply_effect(&self, player: &mut PlayerState, effect: &Effect, polarity: Polarity) {
        player.health = self.apply_to_stat(&player.health, StatKind::Health, effect, polarity);
        player.attack = self.apply_to_stat(&player.attack, StatKind::Attack, effect, polarity);
        player.record(effect.clone(), polarity);

        debug!(
            encoding = %self.encoding(),
            ?polarity,
            %effect,
            health = %player.health,
            attack = %player.attack,
            "applied effect"
        );
    }
}

/// Scalar encoding: one number moves both stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumericEncoder;

impl NumericEncoder {
    fn effect_value(effect: &Effect) -> i64 {
        match effect {
            Effect::Numeric(n) => *n,
            Effect::Symbolic(s) => s.trim().parse().unwrap_or(0),
        }
    }

    fn stat_value(stat: &Stat) -> i64 {
        match stat {
            Stat::Numeric(n) => *n,
            Stat::Symbolic(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

impl EffectEncoder for NumericEncoder {
    fn encoding(&self) -> Encoding {
        Encoding::Numeric
    }

    fn apply_to_stat(&self, stat: &Stat, _kind: StatKind, effect: &Effect, polarity: Polarity) -> Stat {
        let current = Self::stat_value(stat);
        let delta = Self::effect_value(effect);
        let next = match polarity {
            Polarity::Reward => current.saturating_add(delta),
            Polarity::Penalty => current.saturating_sub(delta),
        };
        Stat::Numeric(next.max(0))
    }

    fn power_units(&self, attack: &Stat) -> i64 {
        Self::stat_value(attack)
    }

    fn starting_stat(&self, _kind: StatKind, units: i64) -> Stat {
        Stat::Numeric(units.max(0))
    }

    fn normalize(&self, effect: &Effect) -> Option<Effect> {
        match effect {
            Effect::Numeric(n) => Some(Effect::Numeric(*n)),
            Effect::Symbolic(s) => s.trim().parse().ok().map(Effect::Numeric),
        }
    }
}

/// Glyph encoding: stats are strings of repeated glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolicEncoder {
    vitality: String,
    power: String,
}

impl SymbolicEncoder {
    /// Create an encoder with custom glyphs.
    #[must_use]
    pub fn new(vitality: impl Into<String>, power: impl Into<String>) -> Self {
        Self {
            vitality: vitality.into(),
            power: power.into(),
        }
    }

    #[must_use]
    pub fn vitality_glyph(&self) -> &str {
        &self.vitality
    }

    #[must_use]
    pub fn power_glyph(&self) -> &str {
        &self.power
    }

    fn glyph(&self, kind: StatKind) -> &str {
        match kind {
            StatKind::Health => &self.vitality,
            StatKind::Attack => &self.power,
        }
    }

    /// Number of `glyph` occurrences in `text`.
    #[must_use]
    pub fn count(text: &str, glyph: &str) -> usize {
        if glyph.is_empty() {
            return 0;
        }
        text.matches(glyph).count()
    }

    /// Remove up to `count` occurrences of `glyph`, latest first.
    fn remove_glyphs(text: &str, glyph: &str, count: usize) -> String {
        let mut out = text.to_owned();
        if glyph.is_empty() {
            return out;
        }
        for _ in 0..count {
            match out.rfind(glyph) {
                Some(idx) => out.replace_range(idx..idx + glyph.len(), ""),
                None => break,
            }
        }
        out
    }
}

impl Default for SymbolicEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_VITALITY_GLYPH, DEFAULT_POWER_GLYPH)
    }
}

impl EffectEncoder for SymbolicEncoder {
    fn encoding(&self) -> Encoding {
        Encoding::Symbolic
    }

    fn apply_to_stat(&self, stat: &Stat, kind: StatKind, effect: &Effect, polarity: Polarity) -> Stat {
        let current = stat.as_symbolic().unwrap_or_default();
        let glyph = self.glyph(kind);
        let units = Self::count(effect.as_symbolic().unwrap_or_default(), glyph);

        let next = match polarity {
            Polarity::Reward => {
                let mut grown = current.to_owned();
                grown.push_str(&glyph.repeat(units));
                grown
            }
            Polarity::Penalty => Self::remove_glyphs(current, glyph, units),
        };
        Stat::Symbolic(next)
    }

    fn power_units(&self, attack: &Stat) -> i64 {
        let count = Self::count(attack.as_symbolic().unwrap_or_default(), &self.power);
        i64::try_from(count).unwrap_or(i64::MAX)
    }

    fn starting_stat(&self, kind: StatKind, units: i64) -> Stat {
        let units = usize::try_from(units).unwrap_or(0);
        Stat::Symbolic(self.glyph(kind).repeat(units))
    }

    fn normalize(&self, effect: &Effect) -> Option<Effect> {
        match effect {
            Effect::Symbolic(s) => Some(Effect::Symbolic(s.clone())),
            Effect::Numeric(_) => None,
        }
    }
}
