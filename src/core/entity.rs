//! Enemy identification.
//!
//! Every enemy gets a unique `EnemyId` when it is ingested from the
//! catalog. Ids are UUID v4 values whose random bytes come from a seeded
//! stream, so a fixed seed reproduces the same ids.
//!
//! ```
//! use rust_brawl::core::{EnemyId, GameRng, IdAllocator};
//!
//! let mut ids = IdAllocator::new(GameRng::new(42));
//! let a = ids.next_id();
//! let b = ids.next_id();
//! assert_ne!(a, b);
//!
//! let parsed: EnemyId = a.to_string().parse().unwrap();
//! assert_eq!(parsed, a);
//! ```

use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use super::rng::GameRng;

/// Unique, opaque identifier for an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyId(Uuid);

impl EnemyId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Build a v4 id from 16 random bytes.
    #[must_use]
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for EnemyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Hands out fresh enemy ids from a dedicated random stream.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    rng: GameRng,
}

impl IdAllocator {
    /// Create an allocator drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> EnemyId {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        EnemyId::from_random_bytes(bytes)
    }
}
