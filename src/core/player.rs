//! Player state: current stats plus reward/penalty history.
//!
//! ## PlayerState
//!
//! Health and attack are [`Stat`] values whose meaning depends on the
//! session's encoding. Logs are most recent first.
//!
//! ## PlayerOverride
//!
//! Merge-style partial update. Only provided fields change; nothing is
//! validated, so this doubles as a calibration hook for tests.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::effects::{Effect, Polarity, Stat};

/// Mutable player record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current health.
    pub health: Stat,

    /// Current attack modifier.
    pub attack: Stat,

    /// Rewards received, most recent first.
    pub rewards: Vector<Effect>,

    /// Penalties received, most recent first.
    pub penalties: Vector<Effect>,
}

impl PlayerState {
    /// Create a player with the given stats and empty logs.
    #[must_use]
    pub fn new(health: Stat, attack: Stat) -> Self {
        Self {
            health,
            attack,
            rewards: Vector::new(),
            penalties: Vector::new(),
        }
    }

    /// Read-only copy of the current state.
    ///
    /// Logs are persistent vectors, so this is cheap.
    #[must_use]
    pub fn snapshot(&self) -> PlayerState {
        self.clone()
    }

    /// Prepend an effect to the matching log.
    pub fn record(&mut self, effect: Effect, polarity: Polarity) {
        match polarity {
            Polarity::Reward => self.rewards.push_front(effect),
            Polarity::Penalty => self.penalties.push_front(effect),
        }
    }

    /// Merge an override into this state.
    pub fn apply_override(&mut self, update: PlayerOverride) {
        if let Some(health) = update.health {
            self.health = health;
        }
        if let Some(attack) = update.attack {
            self.attack = attack;
        }
        if let Some(rewards) = update.rewards {
            self.rewards = rewards;
        }
        if let Some(penalties) = update.penalties {
            self.penalties = penalties;
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(
            Stat::Numeric(super::config::DEFAULT_STARTING_HEALTH),
            Stat::Numeric(super::config::DEFAULT_STARTING_ATTACK),
        )
    }
}

/// Partial player update.
///
/// ```
/// use rust_brawl::core::{PlayerOverride, PlayerState};
/// use rust_brawl::effects::Stat;
///
/// let mut player = PlayerState::default();
/// player.apply_override(PlayerOverride::new().with_attack(Stat::Numeric(4)));
///
/// assert_eq!(player.attack, Stat::Numeric(4));
/// assert_eq!(player.health, Stat::Numeric(3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOverride {
    pub health: Option<Stat>,
    pub attack: Option<Stat>,
    pub rewards: Option<Vector<Effect>>,
    pub penalties: Option<Vector<Effect>>,
}

impl PlayerOverride {
    /// Create an override that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_health(mut self, health: impl Into<Stat>) -> Self {
        self.health = Some(health.into());
        self
    }

    #[must_use]
    pub fn with_attack(mut self, attack: impl Into<Stat>) -> Self {
        self.attack = Some(attack.into());
        self
    }

    #[must_use]
    pub fn with_rewards(mut self, rewards: impl IntoIterator<Item = Effect>) -> Self {
        self.rewards = Some(rewards.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_penalties(mut self, penalties: impl IntoIterator<Item = Effect>) -> Self {
        self.penalties = Some(penalties.into_iter().collect());
        self
    }

    /// True if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.health.is_none()
            && self.attack.is_none()
            && self.rewards.is_none()
            && self.penalties.is_none()
    }
}
