//! Effect and stat values.
//!
//! Both come in two representations, numeric and symbolic. Only one is
//! meaningful per session; the active [`EffectEncoder`] decides how each
//! is read.
//!
//! [`EffectEncoder`]: super::EffectEncoder

use serde::{Deserialize, Serialize};

/// A reward or penalty value.
///
/// Deserializes untagged: JSON numbers become `Numeric`, JSON strings
/// become `Symbolic`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Effect {
    /// Scalar delta applied to both health and attack.
    Numeric(i64),
    /// Glyph string; vitality glyphs drive health, power glyphs drive attack.
    Symbolic(String),
}

impl Effect {
    /// Get the numeric value, if this is a numeric effect.
    #[must_use]
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Effect::Numeric(n) => Some(*n),
            Effect::Symbolic(_) => None,
        }
    }

    /// Get the glyph string, if this is a symbolic effect.
    #[must_use]
    pub fn as_symbolic(&self) -> Option<&str> {
        match self {
            Effect::Numeric(_) => None,
            Effect::Symbolic(s) => Some(s),
        }
    }
}

impl From<i64> for Effect {
    fn from(n: i64) -> Self {
        Effect::Numeric(n)
    }
}

impl From<&str> for Effect {
    fn from(s: &str) -> Self {
        Effect::Symbolic(s.to_string())
    }
}

impl From<String> for Effect {
    fn from(s: String) -> Self {
        Effect::Symbolic(s)
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Numeric(n) => write!(f, "{n}"),
            Effect::Symbolic(s) => f.write_str(s),
        }
    }
}

/// A player stat (health or attack).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Numeric(i64),
    Symbolic(String),
}

impl Stat {
    #[must_use]
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Stat::Numeric(n) => Some(*n),
            Stat::Symbolic(_) => None,
        }
    }

    #[must_use]
    pub fn as_symbolic(&self) -> Option<&str> {
        match self {
            Stat::Numeric(_) => None,
            Stat::Symbolic(s) => Some(s),
        }
    }
}

impl From<i64> for Stat {
    fn from(n: i64) -> Self {
        Stat::Numeric(n)
    }
}

impl From<&str> for Stat {
    fn from(s: &str) -> Self {
        Stat::Symbolic(s.to_string())
    }
}

impl From<String> for Stat {
    fn from(s: String) -> Self {
        Stat::Symbolic(s)
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stat::Numeric(n) => write!(f, "{n}"),
            Stat::Symbolic(s) => f.write_str(s),
        }
    }
}

/// Whether an effect is gained or lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Reward,
    Penalty,
}

/// Which stat an effect is being applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    Attack,
}
