//! Dice-based fight resolution.
//!
//! A fight rolls one die for the player and one for the enemy. The player
//! adds their attack units, the enemy adds its level. The higher total
//! wins; equal totals are settled by the configured [`TieBreak`].
//!
//! - Win: enemy moves to defeated, its reward is applied.
//! - Lose: enemy goes back to the pool (not logged as a withdrawal), its
//!   penalty is applied.
//! - Draw: nothing changes.
//!
//! A fight performs at most one roster move and one effect application.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{EnemyId, PlayerState, RandomSource};
use crate::effects::{Effect, EffectEncoder, Polarity};
use crate::roster::RosterManager;

/// Faces on the standard combat die.
pub const D20: u32 = 20;

/// Resolution of equal roll totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Equal totals end the fight with no effect.
    #[default]
    Draw,
    /// Equal totals count as a player win.
    PlayerWins,
}

/// One side's roll: the die result plus a flat modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub base: u32,
    pub modifier: i64,
}

impl Roll {
    #[must_use]
    pub const fn new(base: u32, modifier: i64) -> Self {
        Self { base, modifier }
    }

    /// Die result plus modifier.
    #[must_use]
    pub fn total(&self) -> i64 {
        i64::from(self.base).saturating_add(self.modifier)
    }
}

/// How a fight ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightOutcome {
    Win { reward: Effect },
    Lose { penalty: Effect },
    Draw,
}

impl FightOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, FightOutcome::Win { .. })
    }

    #[must_use]
    pub fn is_loss(&self) -> bool {
        matches!(self, FightOutcome::Lose { .. })
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, FightOutcome::Draw)
    }
}

/// Result of a single fight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightResult {
    pub enemy_id: EnemyId,
    pub enemy_name: String,
    pub player_roll: Roll,
    pub enemy_roll: Roll,
    pub outcome: FightOutcome,
}

impl std::fmt::Display for FightResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headline = match self.outcome {
            FightOutcome::Win { .. } => "You WON!",
            FightOutcome::Lose { .. } => "You LOST.",
            FightOutcome::Draw => "DRAW.",
        };
        writeln!(f, "{headline} ({})", self.enemy_name)?;
        write!(
            f,
            "You: {} | Enemy: {}",
            self.player_roll.total(),
            self.enemy_roll.total()
        )?;
        match &self.outcome {
            FightOutcome::Win { reward } => write!(f, "\nReward: {reward}"),
            FightOutcome::Lose { penalty } => write!(f, "\nPenalty: {penalty}"),
            FightOutcome::Draw => Ok(()),
        }
    }
}

/// Resolves fights between the player and active enemies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatResolver {
    dice_sides: u32,
    tie_break: TieBreak,
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self {
            dice_sides: D20,
            tie_break: TieBreak::Draw,
        }
    }
}

impl CombatResolver {
    /// d20, ties are draws.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dice_sides(mut self, sides: u32) -> Self {
        self.dice_sides = sides.max(1);
        self
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn dice_sides(&self) -> u32 {
        self.dice_sides
    }

    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Fight the active enemy `id`.
    ///
    /// Returns `None` without rolling if `id` is not active. The player's
    /// die is rolled before the enemy's.
    pub fn fight(
        &self,
        id: EnemyId,
        roster: &mut RosterManager,
        player: &mut PlayerState,
        encoder: &dyn EffectEncoder,
        rng: &mut dyn RandomSource,
    ) -> Option<FightResult> {
        let enemy = roster.get_active(id)?.clone();

        let player_roll = Roll::new(
            rng.roll_die(self.dice_sides),
            encoder.power_units(&player.attack),
        );
        let enemy_roll = Roll::new(rng.roll_die(self.dice_sides), i64::from(enemy.level));

        let player_wins = match player_roll.total().cmp(&enemy_roll.total()) {
            Ordering::Greater => Some(true),
            Ordering::Less => Some(false),
            Ordering::Equal => match self.tie_break {
                TieBreak::Draw => None,
                TieBreak::PlayerWins => Some(true),
            },
        };

        let outcome = match player_wins {
            Some(true) => {
                roster.mark_defeated(id);
                encoder.apply_effect(player, &enemy.reward, Polarity::Reward);
                FightOutcome::Win { reward: enemy.reward.clone() }
            }
            Some(false) => {
                roster.return_to_pool(id);
                encoder.apply_effect(player, &enemy.penalty, Polarity::Penalty);
                FightOutcome::Lose { penalty: enemy.penalty.clone() }
            }
            None => FightOutcome::Draw,
        };

        info!(
            enemy = %enemy.name,
            %id,
            player_roll = player_roll.total(),
            enemy_roll = enemy_roll.total(),
            ?outcome,
            "fight resolved"
        );

        Some(FightResult {
            enemy_id: id,
            enemy_name: enemy.name,
            player_roll,
            enemy_roll,
            outcome,
        })
    }
}
