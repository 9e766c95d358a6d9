//! Fight events for display and reporting.
//!
//! The engine pushes every [`FightResult`](crate::combat::FightResult) to
//! the sinks registered on a session. Sinks only observe; nothing they do
//! feeds back into engine state.

mod sink;

pub use sink::{FightLog, FightSink, TracingSink};
