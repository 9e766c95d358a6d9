//! Battle session: roster, player, encoder, dice and sinks in one place.

use im::Vector;
use tracing::{info, warn};

use crate::cards::{build_enemies, CatalogSource, Enemy, EnemyRecord};
use crate::combat::{CombatResolver, FightResult, TieBreak};
use crate::core::{
    EnemyId, EngineConfig, GameRng, IdAllocator, PlayerOverride, PlayerState, RandomSource,
};
use crate::effects::{EffectEncoder, Encoding, StatKind};
use crate::error::{CatalogError, ConfigError};
use crate::events::FightSink;
use crate::roster::RosterManager;

/// Stream name for enemy id allocation.
const ID_STREAM: &str = "enemy-ids";

/// A single-player battle session.
///
/// All operations run to completion on `&mut self`. Lookups that miss
/// return `None` and leave state untouched.
///
/// ## Example
///
/// ```
/// use rust_brawl::cards::{EnemyRecord, StaticCatalog};
/// use rust_brawl::core::ScriptedRng;
/// use rust_brawl::session::SessionBuilder;
///
/// let mut session = SessionBuilder::new()
///     .seed(1)
///     .rng(ScriptedRng::new(1).with_rolls([15, 5]))
///     .build()
///     .unwrap();
///
/// session.load_catalog(&mut StaticCatalog::new([EnemyRecord::new("Slime", 1i64, 1i64)]));
/// let enemy = session.pick_random_to_active().unwrap();
///
/// let result = session.fight_enemy(enemy.id).unwrap();
/// assert!(result.outcome.is_win());
/// assert_eq!(session.defeated().len(), 1);
/// ```
pub struct Session {
    roster: RosterManager,
    player: PlayerState,
    encoder: Box<dyn EffectEncoder>,
    resolver: CombatResolver,
    rng: Box<dyn RandomSource>,
    ids: IdAllocator,
    sinks: Vec<Box<dyn FightSink>>,
}

impl Session {
    /// Build a session from a configuration.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        SessionBuilder::from_config(config).build()
    }

    // === Catalog ===

    /// Load enemies from `source` into the back of the pool.
    ///
    /// A failing source is logged and leaves the pool as it was. Returns
    /// the number of enemies added.
    pub fn load_catalog(&mut self, source: &mut dyn CatalogSource) -> usize {
        match self.try_load_catalog(source) {
            Ok(added) => added,
            Err(err) => {
                warn!(error = %err, "enemy catalog unavailable");
                0
            }
        }
    }

    /// Like [`load_catalog`](Self::load_catalog) but hands the error back.
    pub fn try_load_catalog(&mut self, source: &mut dyn CatalogSource) -> Result<usize, CatalogError> {
        let records = source.fetch()?;
        Ok(self.add_enemies(records))
    }

    /// Ingest records directly, assigning fresh ids.
    pub fn add_enemies(&mut self, records: impl IntoIterator<Item = EnemyRecord>) -> usize {
        let enemies = build_enemies(records, self.encoder.as_ref(), &mut self.ids);
        let added = enemies
            .into_iter()
            .map(|enemy| self.roster.insert(enemy))
            .filter(|&inserted| inserted)
            .count();
        info!(added, pool = self.roster.pool().len(), "loaded enemies");
        added
    }

    // === Actions ===

    /// Move a random pool enemy into active.
    pub fn pick_random_to_active(&mut self) -> Option<Enemy> {
        self.roster.pick_random(self.rng.as_mut())
    }

    /// Move a specific pool enemy into active.
    pub fn pick_by_id_to_active(&mut self, id: EnemyId) -> Option<Enemy> {
        self.roster.pick_by_id(id)
    }

    /// Send an active enemy back to the pool and log the withdrawal.
    pub fn withdraw(&mut self, id: EnemyId) -> Option<Enemy> {
        self.roster.withdraw(id)
    }

    /// Mark an active enemy defeated without fighting.
    pub fn mark_defeated(&mut self, id: EnemyId) -> Option<Enemy> {
        self.roster.mark_defeated(id)
    }

    /// Fight an active enemy and notify every sink of the result.
    pub fn fight_enemy(&mut self, id: EnemyId) -> Option<FightResult> {
        let result = self.resolver.fight(
            id,
            &mut self.roster,
            &mut self.player,
            self.encoder.as_ref(),
            self.rng.as_mut(),
        )?;

        for sink in &mut self.sinks {
            sink.on_fight(&result);
        }
        Some(result)
    }

    /// Merge a partial update into the player. Not validated.
    pub fn set_player(&mut self, update: PlayerOverride) {
        self.player.apply_override(update);
    }

    /// Register a sink for fight results.
    pub fn add_sink(&mut self, sink: impl FightSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // === Read access ===

    #[must_use]
    pub fn pool(&self) -> &Vector<Enemy> {
        self.roster.pool()
    }

    #[must_use]
    pub fn active(&self) -> &Vector<Enemy> {
        self.roster.active()
    }

    #[must_use]
    pub fn defeated(&self) -> &Vector<Enemy> {
        self.roster.defeated()
    }

    /// Withdrawal log, most recent first.
    #[must_use]
    pub fn stored(&self) -> &Vector<EnemyId> {
        self.roster.stored()
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn roster(&self) -> &RosterManager {
        &self.roster
    }

    #[must_use]
    pub fn encoder(&self) -> &dyn EffectEncoder {
        self.encoder.as_ref()
    }

    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoder.encoding()
    }

    #[must_use]
    pub fn resolver(&self) -> &CombatResolver {
        &self.resolver
    }
}

/// Builder for creating a [`Session`].
pub struct SessionBuilder {
    config: EngineConfig,
    rng: Option<Box<dyn RandomSource>>,
    sinks: Vec<Box<dyn FightSink>>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl SessionBuilder {
    /// Builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder starting from an existing configuration.
    #[must_use]
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            rng: None,
            sinks: Vec::new(),
        }
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Select the stat encoding.
    #[must_use]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Starting health in encoding units. Must not be negative.
    #[must_use]
    pub fn starting_health(mut self, units: i64) -> Self {
        self.config.starting_health = units;
        self
    }

    /// Starting attack in encoding units. Must not be negative.
    #[must_use]
    pub fn starting_attack(mut self, units: i64) -> Self {
        self.config.starting_attack = units;
        self
    }

    /// Faces on each combat die.
    #[must_use]
    pub fn dice_sides(mut self, sides: u32) -> Self {
        self.config.dice_sides = sides;
        self
    }

    /// How equal totals are resolved.
    #[must_use]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Vitality and power glyphs for the symbolic encoding.
    #[must_use]
    pub fn glyphs(mut self, vitality: impl Into<String>, power: impl Into<String>) -> Self {
        self.config.vitality_glyph = vitality.into();
        self.config.power_glyph = power.into();
        self
    }

    /// Use `rng` for selection and dice instead of a seeded [`GameRng`].
    #[must_use]
    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Register a sink for fight results.
    #[must_use]
    pub fn sink(mut self, sink: impl FightSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Validate the configuration and build the session.
    pub fn build(self) -> Result<Session, ConfigError> {
        self.config.validate()?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let base_rng = GameRng::new(seed);
        let encoder = self.config.encoder();
        let player = PlayerState::new(
            encoder.starting_stat(StatKind::Health, self.config.starting_health),
            encoder.starting_stat(StatKind::Attack, self.config.starting_attack),
        );

        let ids = IdAllocator::new(base_rng.for_context(ID_STREAM));
        let rng: Box<dyn RandomSource> = match self.rng {
            Some(rng) => rng,
            None => Box::new(base_rng),
        };

        info!(seed, encoding = %encoder.encoding(), "starting session");

        Ok(Session {
            roster: RosterManager::new(),
            player,
            resolver: self.config.resolver(),
            encoder,
            rng,
            ids,
            sinks: self.sinks,
        })
    }
}
