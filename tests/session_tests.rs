//! End-to-end session tests.
//!
//! Configuration, player overrides and a full play-through with logging
//! enabled. Run with `RUST_LOG=rust_brawl=debug` to see the trace.

use std::cell::RefCell;
use std::rc::Rc;

use rust_brawl::cards::{EnemyRecord, StaticCatalog};
use rust_brawl::combat::TieBreak;
use rust_brawl::core::{EngineConfig, PlayerOverride, ScriptedRng};
use rust_brawl::effects::{Effect, Encoding, Stat};
use rust_brawl::error::ConfigError;
use rust_brawl::events::{FightLog, TracingSink};
use rust_brawl::session::{Session, SessionBuilder};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Configuration
// =============================================================================

/// A TOML config drives the session.
#[test]
fn test_session_from_toml() {
    let config = EngineConfig::from_toml_str(
        r#"
            seed = 99
            encoding = "symbolic"
            starting_health = 4
            starting_attack = 1
            dice_sides = 12
            tie_break = "player_wins"
            vitality_glyph = "+"
            power_glyph = "!"
        "#,
    )
    .unwrap();

    let session = Session::new(config).unwrap();

    assert_eq!(session.encoding(), Encoding::Symbolic);
    assert_eq!(session.player().health, Stat::from("++++"));
    assert_eq!(session.player().attack, Stat::from("!"));
    assert_eq!(session.resolver().dice_sides(), 12);
    assert_eq!(session.resolver().tie_break(), TieBreak::PlayerWins);
}

/// Config files are read from disk.
#[test]
fn test_config_from_path() {
    let path = std::env::temp_dir().join(format!("rust_brawl_{}_engine.toml", std::process::id()));
    std::fs::write(&path, "seed = 1\nstarting_health = 10\n").unwrap();

    let config = EngineConfig::from_path(&path);
    std::fs::remove_file(&path).ok();

    let config = config.unwrap();
    assert_eq!(config.seed, Some(1));
    assert_eq!(config.starting_health, 10);
    assert_eq!(config.encoding, Encoding::Numeric);
}

/// Bad configs are rejected before a session exists.
#[test]
fn test_invalid_configs() {
    assert!(matches!(
        EngineConfig::from_toml_str("dice_sides = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("encoding = \"roman\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        EngineConfig::from_path("/nonexistent/rust_brawl.toml"),
        Err(ConfigError::Io { .. })
    ));

    let overlapping = SessionBuilder::new()
        .encoding(Encoding::Symbolic)
        .glyphs("ab", "b")
        .build();
    assert!(overlapping.is_err());

    // Glyphs that only overlap across a boundary, as in "abab"
    let straddling = SessionBuilder::new()
        .encoding(Encoding::Symbolic)
        .glyphs("ab", "ba")
        .build();
    assert!(straddling.is_err());
}

/// Negative starting stats are rejected on every configuration path.
#[test]
fn test_negative_starting_stats() {
    let from_toml = EngineConfig::from_toml_str("starting_health = -5\nstarting_attack = -2");
    assert!(matches!(from_toml, Err(ConfigError::Invalid(_))));

    assert!(matches!(
        SessionBuilder::new().starting_health(-1).build(),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        SessionBuilder::new().starting_attack(-3).build(),
        Err(ConfigError::Invalid(_))
    ));

    let session = SessionBuilder::new().starting_health(0).build().unwrap();
    assert_eq!(session.player().health, Stat::Numeric(0));
}

// =============================================================================
// Player overrides
// =============================================================================

/// Overrides merge: only the supplied fields change.
#[test]
fn test_set_player_merges() {
    let mut session = SessionBuilder::new().seed(4).build().unwrap();

    session.set_player(PlayerOverride::new().with_health(Stat::Numeric(10)));
    assert_eq!(session.player().health, Stat::Numeric(10));
    assert_eq!(session.player().attack, Stat::Numeric(0));

    session.set_player(PlayerOverride::new().with_rewards([Effect::Numeric(7)]));
    assert_eq!(session.player().health, Stat::Numeric(10));
    assert_eq!(session.player().rewards.len(), 1);

    // Empty override is a no-op
    let before = session.player().snapshot();
    session.set_player(PlayerOverride::new());
    assert_eq!(session.player(), &before);
}

/// Overrides are not validated: a negative health is stored as given.
#[test]
fn test_set_player_not_validated() {
    let mut session = SessionBuilder::new().seed(4).build().unwrap();
    session.set_player(PlayerOverride::new().with_health(Stat::Numeric(-5)));
    assert_eq!(session.player().health, Stat::Numeric(-5));
}

// =============================================================================
// Play-through
// =============================================================================

/// A short game: pick, withdraw, fight to a win, a loss and a draw.
#[test]
fn test_full_game() {
    init_tracing();

    let log = Rc::new(RefCell::new(FightLog::new()));
    let mut session = SessionBuilder::new()
        .seed(2024)
        .rng(
            ScriptedRng::new(2024)
                .with_indices([0, 0, 0])
                .with_rolls([18, 2, 3, 17, 9, 9]),
        )
        .sink(Rc::clone(&log))
        .sink(TracingSink)
        .build()
        .unwrap();

    let mut catalog = StaticCatalog::new([
        EnemyRecord::new("Slime", 1i64, 1i64).with_icon("S"),
        EnemyRecord::new("Wolf", 2i64, 1i64).with_icon("W"),
        EnemyRecord::new("Bandit", 3i64, 2i64).with_icon("B"),
    ]);
    assert_eq!(session.load_catalog(&mut catalog), 3);

    // Pick Slime, put it back, pick it again
    let slime = session.pick_random_to_active().unwrap();
    assert_eq!(slime.name, "Slime");
    session.withdraw(slime.id).unwrap();
    assert_eq!(session.stored().front(), Some(&slime.id));
    let again = session.pick_random_to_active().unwrap();
    assert_eq!(again.id, slime.id);

    // 18 vs 2: win
    let win = session.fight_enemy(slime.id).unwrap();
    assert!(win.outcome.is_win());
    assert_eq!(session.player().health, Stat::Numeric(4));
    assert_eq!(session.player().attack, Stat::Numeric(1));

    // Wolf is now first in the pool; 3 + 1 vs 17: loss
    let wolf = session.pick_random_to_active().unwrap();
    assert_eq!(wolf.name, "Wolf");
    let loss = session.fight_enemy(wolf.id).unwrap();
    assert!(loss.outcome.is_loss());
    assert_eq!(session.player().health, Stat::Numeric(3));
    assert_eq!(session.player().attack, Stat::Numeric(0));
    assert_eq!(session.pool()[0].id, wolf.id);
    assert_eq!(session.stored().len(), 1);

    // Bandit by id; 9 + 0 vs 9 + 0: draw
    let bandit = session.pool().iter().find(|e| e.name == "Bandit").unwrap().clone();
    session.pick_by_id_to_active(bandit.id).unwrap();
    let draw = session.fight_enemy(bandit.id).unwrap();
    assert!(draw.outcome.is_draw());
    assert_eq!(draw.to_string(), "DRAW. (Bandit)\nYou: 9 | Enemy: 9");

    assert_eq!(session.defeated().len(), 1);
    assert_eq!(session.active().len(), 1);
    assert_eq!(session.pool().len(), 1);
    assert!(session.roster().is_consistent());

    let log = log.borrow();
    assert_eq!(log.len(), 3);
    assert!(log.latest().unwrap().outcome.is_draw());
}

/// Two sessions with the same seed play identically.
#[test]
fn test_seeded_replay() {
    fn play(seed: u64) -> Vec<String> {
        let mut session = SessionBuilder::new().seed(seed).build().unwrap();
        session.add_enemies((0..5).map(|n| EnemyRecord::new(format!("E{n}"), 1i64, 1i64)));

        let mut transcript = Vec::new();
        while let Some(enemy) = session.pick_random_to_active() {
            let result = session.fight_enemy(enemy.id).unwrap();
            transcript.push(result.to_string());
            if transcript.len() > 20 {
                break;
            }
            if result.outcome.is_draw() {
                session.mark_defeated(enemy.id);
            }
        }
        transcript
    }

    assert_eq!(play(77), play(77));
}
