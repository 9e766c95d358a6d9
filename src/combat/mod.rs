//! Combat: dice rolls, outcomes, and the resolver that applies them.

mod resolver;

pub use resolver::{CombatResolver, FightOutcome, FightResult, Roll, TieBreak, D20};
