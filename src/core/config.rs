//! Engine configuration.
//!
//! A session is configured once at startup:
//! - which stat encoding is active (numeric or symbolic glyphs)
//! - starting health/attack, expressed in units of that encoding
//! - dice size and tie handling for combat
//! - the RNG seed (random if omitted)
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```
//! use rust_brawl::core::EngineConfig;
//! use rust_brawl::effects::Encoding;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     seed = 7
//!     encoding = "symbolic"
//!     starting_health = 5
//! "#).unwrap();
//!
//! assert_eq!(config.encoding, Encoding::Symbolic);
//! assert_eq!(config.starting_health, 5);
//! assert_eq!(config.dice_sides, 20);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::{CombatResolver, TieBreak, D20};
use crate::effects::{
    EffectEncoder, Encoding, NumericEncoder, SymbolicEncoder, DEFAULT_POWER_GLYPH,
    DEFAULT_VITALITY_GLYPH,
};
use crate::error::ConfigError;

/// Starting health when nothing is configured.
pub const DEFAULT_STARTING_HEALTH: i64 = 3;

/// Starting attack when nothing is configured.
pub const DEFAULT_STARTING_ATTACK: i64 = 0;

/// Complete engine configuration. Missing TOML keys take defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Active stat encoding.
    pub encoding: Encoding,

    /// Starting health in encoding units.
    pub starting_health: i64,

    /// Starting attack in encoding units.
    pub starting_attack: i64,

    /// Faces on each combat die.
    pub dice_sides: u32,

    /// How equal rolls are resolved.
    pub tie_break: TieBreak,

    /// Glyph counted as one unit of health (symbolic encoding).
    pub vitality_glyph: String,

    /// Glyph counted as one unit of attack (symbolic encoding).
    pub power_glyph: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            encoding: Encoding::Numeric,
            starting_health: DEFAULT_STARTING_HEALTH,
            starting_attack: DEFAULT_STARTING_ATTACK,
            dice_sides: D20,
            tie_break: TieBreak::Draw,
            vitality_glyph: DEFAULT_VITALITY_GLYPH.to_string(),
            power_glyph: DEFAULT_POWER_GLYPH.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check values that would make the engine misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dice_sides == 0 {
            return Err(ConfigError::Invalid("dice_sides must be at least 1".into()));
        }
        if self.starting_health < 0 || self.starting_attack < 0 {
            return Err(ConfigError::Invalid(format!(
                "starting stats must not be negative (health {}, attack {})",
                self.starting_health, self.starting_attack
            )));
        }
        if self.encoding == Encoding::Symbolic {
            if self.vitality_glyph.is_empty() || self.power_glyph.is_empty() {
                return Err(ConfigError::Invalid("glyphs must not be empty".into()));
            }
            if glyphs_overlap(&self.vitality_glyph, &self.power_glyph) {
                return Err(ConfigError::Invalid(format!(
                    "vitality glyph {:?} and power glyph {:?} overlap",
                    self.vitality_glyph, self.power_glyph
                )));
            }
        }
        Ok(())
    }

    /// Build the encoder selected by `encoding`.
    #[must_use]
    pub fn encoder(&self) -> Box<dyn EffectEncoder> {
        match self.encoding {
            Encoding::Numeric => Box::new(NumericEncoder),
            Encoding::Symbolic => Box::new(SymbolicEncoder::new(
                self.vitality_glyph.clone(),
                self.power_glyph.clone(),
            )),
        }
    }

    /// Build the combat resolver for these settings.
    #[must_use]
    pub fn resolver(&self) -> CombatResolver {
        CombatResolver::new()
            .with_dice_sides(self.dice_sides)
            .with_tie_break(self.tie_break)
    }
}

/// True if an occurrence of one glyph can share characters with the other.
///
/// Covers containment and a suffix of either glyph being a prefix of the
/// other, so runs like `abab` with glyphs `ab` and `ba` are rejected.
fn glyphs_overlap(a: &str, b: &str) -> bool {
    fn suffix_starts(left: &str, right: &str) -> bool {
        left.char_indices()
            .skip(1)
            .any(|(index, _)| right.starts_with(&left[index..]))
    }

    a.contains(b) || b.contains(a) || suffix_starts(a, b) || suffix_starts(b, a)
}
