//! Enemy cards: records, live enemies, and catalog sources.
//!
//! ## Key Types
//!
//! - `EnemyRecord`: Catalog entry without an id
//! - `Enemy`: Live enemy with its assigned `EnemyId`
//! - `CatalogSource`: Where records come from (`JsonCatalog`, `StaticCatalog`)

pub mod catalog;
pub mod definition;

pub use catalog::{build_enemies, parse_records, CatalogSource, JsonCatalog, StaticCatalog};
pub use definition::{Enemy, EnemyRecord};
