//! Fight sinks.

use std::cell::RefCell;
use std::rc::Rc;

use im::Vector;
use tracing::info;

use crate::combat::FightResult;

/// Receives fight results.
pub trait FightSink {
    fn on_fight(&mut self, result: &FightResult);
}

/// Shared sink, so a caller can keep a handle to a sink it registered.
impl<S: FightSink + ?Sized> FightSink for Rc<RefCell<S>> {
    fn on_fight(&mut self, result: &FightResult) {
        self.borrow_mut().on_fight(result);
    }
}

/// Records results, most recent first.
#[derive(Clone, Debug, Default)]
pub struct FightLog {
    results: Vector<FightResult>,
}

impl FightLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn results(&self) -> &Vector<FightResult> {
        &self.results
    }

    /// Most recent result.
    #[must_use]
    pub fn latest(&self) -> Option<&FightResult> {
        self.results.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}

impl FightSink for FightLog {
    fn on_fight(&mut self, result: &FightResult) {
        self.results.push_front(result.clone());
    }
}

/// Writes each result to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl FightSink for TracingSink {
    fn on_fight(&mut self, result: &FightResult) {
        info!(target: "rust_brawl::display", "{result}");
    }
}
