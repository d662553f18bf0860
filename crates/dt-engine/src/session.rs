//! Session assembly: pool, ledger, classification rule, and listeners.
//!
//! `RollerSession` wires the full pipeline a trigger source sees: roll the
//! pool, classify the result, append it to the history ledger, then notify
//! registered listeners. The pool and ledger are owned here and handed to
//! consumers by reference — there is no ambient global state.

use crate::classify::CritRule;
use crate::config::EngineConfig;
use crate::dice::{Die, DieId};
use crate::error::EngineResult;
use crate::history::HistoryLedger;
use crate::outcome::RollOutcome;
use crate::pool::DicePool;

/// Callback interface for observers of a session.
///
/// Listeners fire only after a successful mutation; a failed roll notifies
/// nobody. Typical implementations drive display refresh or haptic/audio
/// feedback.
pub trait RollListener {
    /// Called after an outcome has been recorded in the ledger.
    fn on_roll(&mut self, outcome: &RollOutcome);

    /// Called after the history ledger has been reset.
    fn on_reset(&mut self) {}
}

/// A dice-rolling session: one pool, one ledger, one classification rule.
pub struct RollerSession {
    pool: DicePool,
    ledger: HistoryLedger,
    rule: CritRule,
    listeners: Vec<Box<dyn RollListener>>,
}

impl RollerSession {
    /// Create a session from a configuration.
    pub fn new(config: EngineConfig) -> Self {
        let pool = match config.seed {
            Some(seed) => DicePool::from_seed(seed),
            None => DicePool::new(),
        };
        Self {
            pool,
            ledger: HistoryLedger::new(),
            rule: CritRule::new(config.crit_die),
            listeners: Vec::new(),
        }
    }

    /// The current pool, for live display.
    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    /// The history ledger, for statistics display.
    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    /// The classification rule in effect.
    pub fn rule(&self) -> &CritRule {
        &self.rule
    }

    /// Register a listener to be notified after rolls and resets.
    pub fn register(&mut self, listener: Box<dyn RollListener>) {
        self.listeners.push(listener);
    }

    /// Add a die to the pool; returns its ID.
    pub fn add_die(&mut self, die: Die) -> EngineResult<DieId> {
        self.pool.add(die)
    }

    /// Add a die to the pool by face count.
    pub fn add_sides(&mut self, sides: u32) -> EngineResult<DieId> {
        self.pool.add_sides(sides)
    }

    /// Remove a die from the pool.
    pub fn remove_die(&mut self, id: DieId) -> EngineResult<()> {
        self.pool.remove(id)
    }

    /// Remove all dice from the pool.
    pub fn clear_pool(&mut self) -> EngineResult<()> {
        self.pool.clear()
    }

    /// Roll the pool, record the outcome, notify listeners, return it.
    pub fn roll(&mut self) -> EngineResult<RollOutcome> {
        self.record(None)
    }

    /// Roll the pool with a label attached to the outcome.
    pub fn roll_labeled(&mut self, label: impl Into<String>) -> EngineResult<RollOutcome> {
        self.record(Some(label.into()))
    }

    fn record(&mut self, label: Option<String>) -> EngineResult<RollOutcome> {
        let mut outcome = self.pool.roll(&self.rule)?;
        if let Some(label) = label {
            outcome = outcome.with_label(label);
        }
        self.ledger.append(outcome.clone());
        for listener in &mut self.listeners {
            listener.on_roll(&outcome);
        }
        Ok(outcome)
    }

    /// Clear the history ledger and notify listeners.
    pub fn reset_history(&mut self) {
        self.ledger.reset();
        for listener in &mut self.listeners {
            listener.on_reset();
        }
    }

    /// Replace the history with previously serialized outcomes.
    pub fn restore_history(&mut self, outcomes: Vec<RollOutcome>) {
        self.ledger = HistoryLedger::from_outcomes(outcomes);
    }

    /// Replace the pool contents with previously serialized die types.
    ///
    /// Fails with `RollInProgress` if a roll is active. Restored dice show
    /// their maximum face, like freshly added ones.
    pub fn restore_pool(&mut self, dice: Vec<Die>) -> EngineResult<()> {
        self.pool.clear()?;
        for die in dice {
            self.pool.add(die)?;
        }
        Ok(())
    }
}
