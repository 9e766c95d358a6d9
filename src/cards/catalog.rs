//! Enemy catalog sources and ingestion.
//!
//! A [`CatalogSource`] yields the ordered list of enemy records a session
//! starts from. Ingestion gives each record a fresh id and converts its
//! effects to the session encoding; records that cannot be converted or
//! decoded are skipped, never fatal.

use std::path::PathBuf;

use tracing::warn;

use super::definition::{Enemy, EnemyRecord};
use crate::core::IdAllocator;
use crate::effects::EffectEncoder;
use crate::error::CatalogError;

/// Supplies enemy records.
pub trait CatalogSource {
    /// Fetch the full, ordered record list.
    fn fetch(&mut self) -> Result<Vec<EnemyRecord>, CatalogError>;
}

#[derive(Clone, Debug)]
enum JsonInput {
    Text(String),
    File(PathBuf),
}

/// Catalog stored as a JSON array of records.
///
/// ```
/// use rust_brawl::cards::{CatalogSource, JsonCatalog};
///
/// let mut catalog = JsonCatalog::from_json(r#"[
///     {"enemyName": "Slime", "enemyIcon": "S", "level": 0, "reward": 1, "penalty": 1},
///     {"bogus": true},
///     {"enemyName": "Wolf", "enemyIcon": "W", "level": 2, "reward": 2, "penalty": 1}
/// ]"#);
///
/// let records = catalog.fetch().unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].enemy_name, "Wolf");
/// ```
#[derive(Clone, Debug)]
pub struct JsonCatalog {
    input: JsonInput,
}

impl JsonCatalog {
    /// Catalog from an in-memory JSON document.
    #[must_use]
    pub fn from_json(text: impl Into<String>) -> Self {
        Self {
            input: JsonInput::Text(text.into()),
        }
    }

    /// Catalog read from a JSON file on each fetch.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: JsonInput::File(path.into()),
        }
    }
}

impl CatalogSource for JsonCatalog {
    fn fetch(&mut self) -> Result<Vec<EnemyRecord>, CatalogError> {
        match &self.input {
            JsonInput::Text(text) => parse_records(text),
            JsonInput::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_records(&text)
            }
        }
    }
}

/// Parse a JSON array of records.
///
/// A document that is not an array is malformed. Array entries that do not
/// decode as records are skipped with a warning.
pub fn parse_records(text: &str) -> Result<Vec<EnemyRecord>, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(entries) = value else {
        return Err(CatalogError::Malformed("expected a JSON array of enemy records".into()));
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<EnemyRecord>(entry) {
            Ok(record) => records.push(record),
            Err(err) => warn!(index, error = %err, "skipping malformed enemy record"),
        }
    }
    Ok(records)
}

/// In-memory catalog.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    records: Vec<EnemyRecord>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = EnemyRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch(&mut self) -> Result<Vec<EnemyRecord>, CatalogError> {
        Ok(self.records.clone())
    }
}

/// Turn records into enemies for the given encoding.
///
/// Order is preserved. Records whose reward or penalty has no meaning in
/// the encoder's representation are dropped.
pub fn build_enemies(
    records: impl IntoIterator<Item = EnemyRecord>,
    encoder: &dyn EffectEncoder,
    ids: &mut IdAllocator,
) -> Vec<Enemy> {
    let mut enemies = Vec::new();
    for record in records {
        let (Some(reward), Some(penalty)) = (
            encoder.normalize(&record.reward),
            encoder.normalize(&record.penalty),
        ) else {
            warn!(
                name = %record.enemy_name,
                encoding = %encoder.encoding(),
                "skipping enemy with effects outside the active encoding"
            );
            continue;
        };

        let record = EnemyRecord {
            reward,
            penalty,
            ..record
        };
        enemies.push(Enemy::from_record(ids.next_id(), record));
    }
    enemies
}
