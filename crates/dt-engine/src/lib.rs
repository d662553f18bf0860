//! Dice-rolling and result-aggregation engine for Dicetray.
//!
//! Models a pool of mixed polyhedral dice with a single atomic roll
//! operation, critical/fumble classification keyed on the d20 by default,
//! and an append-only history ledger with derived statistics. Presentation,
//! persistence, and trigger sources (buttons, shake sensors) live outside
//! this crate and consume it through [`RollerSession`].

pub mod classify;
pub mod config;
pub mod dice;
pub mod error;
pub mod history;
pub mod outcome;
pub mod pool;
pub mod session;

pub use classify::{Classification, CritRule};
pub use config::EngineConfig;
pub use dice::{Die, DieId, PooledDie};
pub use error::{EngineError, EngineResult};
pub use history::{Bucket, HistoryLedger, LedgerStats};
pub use outcome::{DieSnapshot, OutcomeId, RollOutcome};
pub use pool::DicePool;
pub use session::{RollListener, RollerSession};
