//! The user's working set of dice and the roll transaction.
//!
//! A roll is split into two phases so a presentation layer can hold the
//! "rolling" state open while an animation plays: [`DicePool::begin_roll`]
//! raises the guard, [`DicePool::complete_roll`] randomizes every die,
//! builds the outcome, and lowers it. [`DicePool::roll`] does both at once.
//!
//! The guard is the sole serialization mechanism: while it is up, a second
//! `begin_roll` or `roll` fails fast with `RollInProgress` rather than
//! blocking or queueing, and the pool cannot be modified. Die values only
//! change inside `complete_roll`, so a half-rolled pool is never observable.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::classify::CritRule;
use crate::dice::{Die, DieId, PooledDie};
use crate::error::{EngineError, EngineResult};
use crate::outcome::{DieSnapshot, RollOutcome};

/// An ordered collection of dice rolled together.
///
/// Insertion order is meaningful for display only. No upper bound on pool
/// size is enforced here; any cap is a presentation concern.
#[derive(Debug)]
pub struct DicePool {
    dice: Vec<PooledDie>,
    rolling: bool,
    rng: StdRng,
}

impl DicePool {
    /// Create an empty pool seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            dice: Vec::new(),
            rolling: false,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an empty pool with a fixed RNG seed, for reproducible rolls.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            dice: Vec::new(),
            rolling: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Rebuild a pool from a persisted list of die types.
    ///
    /// Restored dice show their maximum face, exactly like freshly added
    /// ones; a rehydrated session is indistinguishable from a new one.
    pub fn from_dice(dice: impl IntoIterator<Item = Die>, seed: Option<u64>) -> Self {
        let mut pool = match seed {
            Some(s) => Self::from_seed(s),
            None => Self::new(),
        };
        for die in dice {
            pool.dice.push(PooledDie::new(die));
        }
        pool
    }

    /// Append a new die showing its maximum face; returns its ID.
    ///
    /// Fails with `RollInProgress` while a roll is active.
    pub fn add(&mut self, die: Die) -> EngineResult<DieId> {
        self.ensure_idle()?;
        let die = PooledDie::new(die);
        let id = die.id;
        self.dice.push(die);
        Ok(id)
    }

    /// Append a new die by face count.
    pub fn add_sides(&mut self, sides: u32) -> EngineResult<DieId> {
        self.add(Die::from_sides(sides)?)
    }

    /// Remove the identified die.
    ///
    /// Fails with `DieNotFound` for an unknown ID (a hard error, not a
    /// silent no-op) and `RollInProgress` while a roll is active.
    pub fn remove(&mut self, id: DieId) -> EngineResult<()> {
        self.ensure_idle()?;
        let pos = self
            .dice
            .iter()
            .position(|d| d.id == id)
            .ok_or(EngineError::DieNotFound(id))?;
        self.dice.remove(pos);
        Ok(())
    }

    /// Remove all dice. Fails with `RollInProgress` while a roll is active.
    pub fn clear(&mut self) -> EngineResult<()> {
        self.ensure_idle()?;
        self.dice.clear();
        Ok(())
    }

    /// The dice in display order.
    pub fn dice(&self) -> &[PooledDie] {
        &self.dice
    }

    /// The die types in display order, for persistence.
    pub fn die_types(&self) -> Vec<Die> {
        self.dice.iter().map(|d| d.die).collect()
    }

    /// Number of dice in the pool.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Whether a roll is currently in progress.
    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// Sum of the current face values; valid before any roll, when it
    /// reflects the maximum-face display defaults.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value()).sum()
    }

    /// Start a roll: raise the rolling guard.
    ///
    /// Fails with `RollInProgress` if a roll is already active and
    /// `EmptyPool` if there is nothing to roll; neither failure changes any
    /// state.
    pub fn begin_roll(&mut self) -> EngineResult<()> {
        if self.rolling {
            return Err(EngineError::RollInProgress);
        }
        if self.dice.is_empty() {
            return Err(EngineError::EmptyPool);
        }
        self.rolling = true;
        Ok(())
    }

    /// Finish a roll started with [`Self::begin_roll`].
    ///
    /// Randomizes every die exactly once, lowers the guard, and returns the
    /// classified outcome. The outcome is not recorded anywhere; appending
    /// it to a ledger is the caller's responsibility so classification and
    /// labelling can happen first. Once started, a roll always completes —
    /// there is no cancellation.
    pub fn complete_roll(&mut self, rule: &CritRule) -> EngineResult<RollOutcome> {
        if !self.rolling {
            return Err(EngineError::RollNotStarted);
        }
        let snapshot: Vec<DieSnapshot> = self
            .dice
            .iter_mut()
            .map(|d| DieSnapshot {
                die: d.die,
                value: d.randomize(&mut self.rng),
            })
            .collect();
        self.rolling = false;
        Ok(RollOutcome::from_snapshot(snapshot, rule))
    }

    /// Roll the whole pool in one call: begin, randomize, complete.
    pub fn roll(&mut self, rule: &CritRule) -> EngineResult<RollOutcome> {
        self.begin_roll()?;
        self.complete_roll(rule)
    }

    fn ensure_idle(&self) -> EngineResult<()> {
        if self.rolling {
            Err(EngineError::RollInProgress)
        } else {
            Ok(())
        }
    }
}

impl Default for DicePool {
    fn default() -> Self {
        Self::new()
    }
}
