//! Error types for the dice engine.

use thiserror::Error;

use crate::dice::DieId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while manipulating or rolling a dice pool.
///
/// Every condition here is local and recoverable; the engine never retries
/// internally, and a failed operation leaves state unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested face count is not a standard polyhedral size.
    #[error("unsupported face count: {0}")]
    InvalidFaceCount(u32),

    /// A roll was attempted while another roll is in progress.
    #[error("a roll is already in progress")]
    RollInProgress,

    /// A roll completion was requested without a roll having been started.
    #[error("no roll has been started")]
    RollNotStarted,

    /// A roll was attempted on a pool with no dice.
    #[error("cannot roll an empty pool")]
    EmptyPool,

    /// The requested die ID does not exist in the pool.
    #[error("die not found: {0}")]
    DieNotFound(DieId),
}
