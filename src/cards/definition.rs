//! Enemy cards: catalog records and live enemies.
//!
//! `EnemyRecord` is the catalog wire format (no id). `Enemy` is the
//! record plus the id assigned at ingestion. Enemies never change after
//! creation; only their roster membership does.

use serde::{Deserialize, Serialize};

use crate::core::EnemyId;
use crate::effects::Effect;

/// Enemy definition as supplied by a catalog.
///
/// ## Example
///
/// ```
/// use rust_brawl::cards::EnemyRecord;
///
/// let record: EnemyRecord = serde_json::from_str(
///     r#"{"enemyName": "Goblin", "enemyIcon": "G", "level": 2, "reward": 1, "penalty": 2}"#,
/// ).unwrap();
///
/// assert_eq!(record, EnemyRecord::new("Goblin", 1i64, 2i64).with_icon("G").with_level(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyRecord {
    pub enemy_name: String,

    #[serde(default)]
    pub enemy_icon: String,

    #[serde(default)]
    pub level: u32,

    pub reward: Effect,

    pub penalty: Effect,
}

impl EnemyRecord {
    /// Create a level-0 record with no icon.
    #[must_use]
    pub fn new(name: impl Into<String>, reward: impl Into<Effect>, penalty: impl Into<Effect>) -> Self {
        Self {
            enemy_name: name.into(),
            enemy_icon: String::new(),
            level: 0,
            reward: reward.into(),
            penalty: penalty.into(),
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.enemy_icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

/// A live enemy card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    pub icon: String,
    /// Added to the enemy's die roll in combat.
    pub level: u32,
    /// Applied to the player on a win.
    pub reward: Effect,
    /// Applied to the player on a loss.
    pub penalty: Effect,
}

impl Enemy {
    /// Create an enemy from a record and a fresh id.
    #[must_use]
    pub fn from_record(id: EnemyId, record: EnemyRecord) -> Self {
        Self {
            id,
            name: record.enemy_name,
            icon: record.enemy_icon,
            level: record.level,
            reward: record.reward,
            penalty: record.penalty,
        }
    }
}

impl std::fmt::Display for Enemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.icon.is_empty() {
            write!(f, "{} (lvl {})", self.name, self.level)
        } else {
            write!(f, "{} {} (lvl {})", self.icon, self.name, self.level)
        }
    }
}
