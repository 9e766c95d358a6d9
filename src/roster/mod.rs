//! Roster system for enemy locations.
//!
//! ## Key Types
//!
//! - `Zone`: Pool, Active or Defeated
//! - `RosterManager`: Enemy membership, movement and the withdrawal log

pub mod manager;

pub use manager::{RosterManager, Zone};
