//! Roster manager for enemy locations and movement.
//!
//! The `RosterManager` owns every enemy and tracks which zone it is in:
//! - `Pool`: available for selection
//! - `Active`: selected and eligible for a fight
//! - `Defeated`: beaten, never leaves again
//!
//! Each enemy is in exactly one zone. Moves put the enemy at the front of
//! the destination list, so every list reads most recently touched first.
//! Withdrawals are additionally logged in `stored`, which is history only
//! and never affects membership.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Enemy;
use crate::core::{EnemyId, RandomSource};

/// Zone an enemy can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Pool,
    Active,
    Defeated,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Pool => f.write_str("pool"),
            Zone::Active => f.write_str("active"),
            Zone::Defeated => f.write_str("defeated"),
        }
    }
}

/// Manages enemy membership across zones.
///
/// Every operation is keyed by id and does nothing when the id is not in
/// the expected source zone.
///
/// ## Usage
///
/// ```
/// use rust_brawl::cards::{Enemy, EnemyRecord};
/// use rust_brawl::core::{EnemyId, GameRng};
/// use rust_brawl::roster::{RosterManager, Zone};
///
/// let mut roster = RosterManager::new();
/// let id = EnemyId::from_random_bytes([1; 16]);
/// roster.insert(Enemy::from_record(id, EnemyRecord::new("Imp", 1i64, 1i64)));
///
/// let mut rng = GameRng::new(42);
/// let picked = roster.pick_random(&mut rng).unwrap();
/// assert_eq!(picked.id, id);
/// assert_eq!(roster.zone_of(id), Some(Zone::Active));
///
/// roster.withdraw(id);
/// assert_eq!(roster.zone_of(id), Some(Zone::Pool));
/// assert_eq!(roster.stored().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RosterManager {
    pool: Vector<Enemy>,
    active: Vector<Enemy>,
    defeated: Vector<Enemy>,

    /// Withdrawn ids, most recent first. An id appears once per withdrawal.
    stored: Vector<EnemyId>,

    /// Enemy locations: enemy_id -> zone
    locations: FxHashMap<EnemyId, Zone>,
}

impl RosterManager {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new enemy to the back of the pool.
    ///
    /// Returns `false` (and changes nothing) if the id is already tracked.
    pub fn insert(&mut self, enemy: Enemy) -> bool {
        if self.locations.contains_key(&enemy.id) {
            return false;
        }
        self.locations.insert(enemy.id, Zone::Pool);
        self.pool.push_back(enemy);
        true
    }

    /// Move a uniformly random pool enemy to the front of active.
    ///
    /// Returns `None` on an empty pool, without touching `rng`.
    pub fn pick_random(&mut self, rng: &mut dyn RandomSource) -> Option<Enemy> {
        if self.pool.is_empty() {
            return None;
        }
        let index = rng.pick_index(self.pool.len());
        let id = self.pool.get(index)?.id;
        self.transfer(id, Zone::Pool, Zone::Active)
    }

    /// Move a specific pool enemy to the front of active.
    pub fn pick_by_id(&mut self, id: EnemyId) -> Option<Enemy> {
        self.transfer(id, Zone::Pool, Zone::Active)
    }

    /// Return an active enemy to the front of the pool and log the withdrawal.
    pub fn withdraw(&mut self, id: EnemyId) -> Option<Enemy> {
        let enemy = self.transfer(id, Zone::Active, Zone::Pool)?;
        self.stored.push_front(id);
        Some(enemy)
    }

    /// Move an active enemy to the front of defeated.
    pub fn mark_defeated(&mut self, id: EnemyId) -> Option<Enemy> {
        self.transfer(id, Zone::Active, Zone::Defeated)
    }

    /// Forced return of an active enemy to the pool after a lost fight.
    ///
    /// Unlike [`withdraw`](Self::withdraw) this is not logged in `stored`.
    pub fn return_to_pool(&mut self, id: EnemyId) -> Option<Enemy> {
        self.transfer(id, Zone::Active, Zone::Pool)
    }

    fn list(&self, zone: Zone) -> &Vector<Enemy> {
        match zone {
            Zone::Pool => &self.pool,
            Zone::Active => &self.active,
            Zone::Defeated => &self.defeated,
        }
    }

    fn list_mut(&mut self, zone: Zone) -> &mut Vector<Enemy> {
        match zone {
            Zone::Pool => &mut self.pool,
            Zone::Active => &mut self.active,
            Zone::Defeated => &mut self.defeated,
        }
    }

    /// Move `id` from `from` to the front of `to`. All-or-nothing.
    fn transfer(&mut self, id: EnemyId, from: Zone, to: Zone) -> Option<Enemy> {
        if self.locations.get(&id) != Some(&from) {
            return None;
        }

        let source = self.list_mut(from);
        let index = source.iter().position(|e| e.id == id)?;
        let enemy = source.remove(index);

        self.list_mut(to).push_front(enemy.clone());
        self.locations.insert(id, to);

        debug!(enemy = %enemy.name, %id, %from, %to, "moved enemy");
        Some(enemy)
    }

    /// Pool enemies, most recently returned first, then catalog order.
    #[must_use]
    pub fn pool(&self) -> &Vector<Enemy> {
        &self.pool
    }

    /// Active enemies, most recently selected first.
    #[must_use]
    pub fn active(&self) -> &Vector<Enemy> {
        &self.active
    }

    /// Defeated enemies, most recently defeated first.
    #[must_use]
    pub fn defeated(&self) -> &Vector<Enemy> {
        &self.defeated
    }

    /// Withdrawal log, most recent first.
    #[must_use]
    pub fn stored(&self) -> &Vector<EnemyId> {
        &self.stored
    }

    /// Withdrawn enemies resolved from the log, most recent first.
    pub fn stored_enemies(&self) -> impl Iterator<Item = &Enemy> + '_ {
        self.stored.iter().filter_map(move |&id| self.get(id))
    }

    /// Enemies currently in `zone`.
    #[must_use]
    pub fn enemies_in(&self, zone: Zone) -> &Vector<Enemy> {
        self.list(zone)
    }

    /// Get the zone an enemy is in.
    #[must_use]
    pub fn zone_of(&self, id: EnemyId) -> Option<Zone> {
        self.locations.get(&id).copied()
    }

    /// Look up an enemy wherever it is.
    #[must_use]
    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        let zone = self.zone_of(id)?;
        self.list(zone).iter().find(|e| e.id == id)
    }

    /// Look up an enemy only if it is active.
    #[must_use]
    pub fn get_active(&self, id: EnemyId) -> Option<&Enemy> {
        match self.zone_of(id)? {
            Zone::Active => self.active.iter().find(|e| e.id == id),
            _ => None,
        }
    }

    /// Total number of enemies tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Check that every tracked enemy sits in exactly one list, matching its
    /// recorded zone.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let listed = self.pool.len() + self.active.len() + self.defeated.len();
        if listed != self.locations.len() {
            return false;
        }
        [Zone::Pool, Zone::Active, Zone::Defeated].into_iter().all(|zone| {
            self.list(zone)
                .iter()
                .all(|e| self.locations.get(&e.id) == Some(&zone))
        })
    }
}
