//! Battle session: the action surface callers drive.
//!
//! A `Session` loads enemies from a catalog, lets the caller move them
//! between pool and active, resolves fights and reports results to sinks.
//! `SessionBuilder` configures encoding, starting stats, dice and RNG.

mod game;

pub use game::{Session, SessionBuilder};
