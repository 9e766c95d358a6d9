//! Fight resolution tests through the session surface.
//!
//! Dice are scripted so each outcome is deterministic.

use std::cell::RefCell;
use std::rc::Rc;

use rust_brawl::cards::EnemyRecord;
use rust_brawl::combat::{FightOutcome, TieBreak};
use rust_brawl::core::{PlayerOverride, ScriptedRng};
use rust_brawl::effects::{Effect, Encoding, Stat};
use rust_brawl::events::FightLog;
use rust_brawl::roster::Zone;
use rust_brawl::session::{Session, SessionBuilder};

/// Session with one level-0 enemy already active.
fn one_active(rolls: &[u32]) -> (Session, rust_brawl::EnemyId) {
    let mut session = SessionBuilder::new()
        .seed(42)
        .rng(ScriptedRng::new(42).with_rolls(rolls.iter().copied()))
        .build()
        .unwrap();
    session.add_enemies([EnemyRecord::new("Goblin", 2i64, 1i64)]);
    let id = session.pool()[0].id;
    session.pick_by_id_to_active(id).unwrap();
    (session, id)
}

// =============================================================================
// Outcomes
// =============================================================================

/// Rolls 15 vs 5 with no modifiers: win, reward applied, enemy defeated.
#[test]
fn test_win_moves_to_defeated_and_rewards() {
    let (mut session, id) = one_active(&[15, 5]);

    let result = session.fight_enemy(id).unwrap();

    assert_eq!(result.player_roll.total(), 15);
    assert_eq!(result.enemy_roll.total(), 5);
    assert_eq!(result.enemy_id, id);
    assert_eq!(result.outcome, FightOutcome::Win { reward: Effect::Numeric(2) });

    assert_eq!(session.roster().zone_of(id), Some(Zone::Defeated));
    assert!(session.active().is_empty());
    assert_eq!(session.player().health, Stat::Numeric(5));
    assert_eq!(session.player().attack, Stat::Numeric(2));
    assert_eq!(session.player().rewards.front(), Some(&Effect::Numeric(2)));
}

/// Rolls 5 vs 15: loss, penalty applied, enemy back in pool, no withdrawal.
#[test]
fn test_loss_returns_to_pool_and_penalizes() {
    let (mut session, id) = one_active(&[5, 15]);

    let result = session.fight_enemy(id).unwrap();

    assert_eq!(result.outcome, FightOutcome::Lose { penalty: Effect::Numeric(1) });
    assert_eq!(session.roster().zone_of(id), Some(Zone::Pool));
    assert_eq!(session.pool()[0].id, id);
    assert!(session.stored().is_empty());
    assert_eq!(session.player().health, Stat::Numeric(2));
    assert_eq!(session.player().attack, Stat::Numeric(0));
    assert_eq!(session.player().penalties.len(), 1);
}

/// Rolls 10 vs 10: draw, nothing changes.
#[test]
fn test_tie_is_a_draw() {
    let (mut session, id) = one_active(&[10, 10]);
    let before = session.player().snapshot();

    let result = session.fight_enemy(id).unwrap();

    assert!(result.outcome.is_draw());
    assert_eq!(result.player_roll.total(), result.enemy_roll.total());
    assert_eq!(session.roster().zone_of(id), Some(Zone::Active));
    assert_eq!(session.player(), &before);
}

/// The draw result is distinguishable from "no such enemy".
#[test]
fn test_draw_differs_from_not_found() {
    let (mut session, id) = one_active(&[10, 10]);
    let missing = rust_brawl::EnemyId::from_random_bytes([0xAB; 16]);

    assert!(session.fight_enemy(missing).is_none());
    assert!(session.fight_enemy(id).is_some());
}

/// With the player-wins tie rule, equal totals defeat the enemy.
#[test]
fn test_tie_break_player_wins() {
    let mut session = SessionBuilder::new()
        .tie_break(TieBreak::PlayerWins)
        .rng(ScriptedRng::new(0).with_rolls([7, 7]))
        .build()
        .unwrap();
    session.add_enemies([EnemyRecord::new("Goblin", 1i64, 1i64)]);
    let enemy = session.pick_random_to_active().unwrap();

    let result = session.fight_enemy(enemy.id).unwrap();

    assert!(result.outcome.is_win());
    assert_eq!(session.defeated().len(), 1);
}

/// Fighting a pool enemy is a miss, not a fight.
#[test]
fn test_fight_requires_active() {
    let mut session = SessionBuilder::new().seed(1).build().unwrap();
    session.add_enemies([EnemyRecord::new("Goblin", 1i64, 1i64)]);
    let id = session.pool()[0].id;

    assert!(session.fight_enemy(id).is_none());
    assert_eq!(session.roster().zone_of(id), Some(Zone::Pool));
}

/// A defeated enemy cannot be fought again.
#[test]
fn test_no_rematch_after_win() {
    let (mut session, id) = one_active(&[20, 1]);
    assert!(session.fight_enemy(id).unwrap().outcome.is_win());
    assert!(session.fight_enemy(id).is_none());
}

// =============================================================================
// Modifiers
// =============================================================================

/// Attack and enemy level shift the totals.
#[test]
fn test_modifiers() {
    let mut session = SessionBuilder::new()
        .starting_attack(3)
        .rng(ScriptedRng::new(0).with_rolls([8, 8]))
        .build()
        .unwrap();
    session.add_enemies([EnemyRecord::new("Knight", 1i64, 1i64).with_level(2)]);
    let enemy = session.pick_random_to_active().unwrap();

    let result = session.fight_enemy(enemy.id).unwrap();

    assert_eq!(result.player_roll.modifier, 3);
    assert_eq!(result.enemy_roll.modifier, 2);
    // 11 vs 10
    assert!(result.outcome.is_win());
}

/// Overrides feed straight into the next fight.
#[test]
fn test_set_player_changes_modifier() {
    let (mut session, id) = one_active(&[5, 15]);
    session.set_player(PlayerOverride::new().with_attack(Stat::Numeric(11)));

    let result = session.fight_enemy(id).unwrap();

    // 16 vs 15
    assert!(result.outcome.is_win());
}

/// Symbolic sessions count power glyphs for the modifier and append
/// reward glyphs.
#[test]
fn test_symbolic_fight() {
    let mut session = SessionBuilder::new()
        .encoding(Encoding::Symbolic)
        .glyphs("h", "s")
        .starting_health(1)
        .starting_attack(2)
        .rng(ScriptedRng::new(0).with_rolls([3, 4, 1, 20]))
        .build()
        .unwrap();
    session.add_enemies([
        EnemyRecord::new("Wisp", "hhs", "hs"),
        EnemyRecord::new("Numbers", 1i64, 1i64),
    ]);

    // The numeric record is skipped under the symbolic encoding
    assert_eq!(session.pool().len(), 1);

    let wisp = session.pick_random_to_active().unwrap();
    let win = session.fight_enemy(wisp.id).unwrap();
    assert_eq!(win.player_roll.total(), 5);
    assert!(win.outcome.is_win());
    assert_eq!(session.player().health, Stat::from("hhh"));
    assert_eq!(session.player().attack, Stat::from("sss"));
}

/// Repeated losses never push stats below zero, and every penalty is logged.
#[test]
fn test_repeated_penalties_clamp() {
    let mut session = SessionBuilder::new()
        .rng(ScriptedRng::new(0).with_rolls([1, 20].repeat(6)))
        .build()
        .unwrap();
    session.add_enemies([EnemyRecord::new("Dragon", 1i64, 2i64).with_level(5)]);

    for _ in 0..6 {
        let dragon = session.pick_random_to_active().unwrap();
        assert!(session.fight_enemy(dragon.id).unwrap().outcome.is_loss());
    }

    assert_eq!(session.player().health, Stat::Numeric(0));
    assert_eq!(session.player().attack, Stat::Numeric(0));
    assert_eq!(session.player().penalties.len(), 6);
}

/// Same as above for glyph stats.
#[test]
fn test_repeated_symbolic_penalties_clamp() {
    let mut session = SessionBuilder::new()
        .encoding(Encoding::Symbolic)
        .glyphs("h", "s")
        .starting_health(2)
        .rng(ScriptedRng::new(0).with_rolls([1, 20].repeat(4)))
        .build()
        .unwrap();
    session.add_enemies([EnemyRecord::new("Hydra", "s", "hhh")]);

    for _ in 0..4 {
        let hydra = session.pick_random_to_active().unwrap();
        session.fight_enemy(hydra.id).unwrap();
    }

    assert_eq!(session.player().health, Stat::from(""));
    assert_eq!(session.player().penalties.len(), 4);
}

// =============================================================================
// Sinks
// =============================================================================

/// Every fight result, including draws, reaches registered sinks.
#[test]
fn test_sinks_receive_results() {
    let log = Rc::new(RefCell::new(FightLog::new()));
    let mut session = SessionBuilder::new()
        .rng(ScriptedRng::new(0).with_rolls([10, 10, 15, 5]))
        .sink(Rc::clone(&log))
        .build()
        .unwrap();
    session.add_enemies([EnemyRecord::new("Goblin", 1i64, 1i64)]);
    let enemy = session.pick_random_to_active().unwrap();

    session.fight_enemy(enemy.id);
    session.fight_enemy(enemy.id);
    // Defeated now: no fight, no event
    session.fight_enemy(enemy.id);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert!(log.latest().unwrap().outcome.is_win());
    assert!(log.results()[1].outcome.is_draw());
}
