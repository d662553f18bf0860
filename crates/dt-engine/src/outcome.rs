//! Immutable records of completed rolls.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::{Classification, CritRule};
use crate::dice::Die;

/// Unique identifier for a roll outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutcomeId(pub Uuid);

impl OutcomeId {
    /// Generate a new random outcome ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OutcomeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OutcomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// One die's contribution to a completed roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieSnapshot {
    /// The type of die that was rolled.
    pub die: Die,
    /// The face it landed on.
    pub value: u32,
}

/// The immutable record of one completed pool roll.
///
/// `total` always equals the sum of the snapshot values, and the
/// classification is fixed at creation; outcomes are never mutated after
/// being appended to a ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Unique identifier for this roll.
    pub id: OutcomeId,
    /// The dice and faces at roll completion, in pool display order.
    pub dice: Vec<DieSnapshot>,
    /// Sum of all face values.
    pub total: u32,
    /// Critical/fumble status.
    pub result: Classification,
    /// When the roll completed.
    pub timestamp: DateTime<Utc>,
    /// Optional user label, e.g. "Stealth Check".
    pub label: Option<String>,
}

impl RollOutcome {
    /// Build an outcome from a completed snapshot, summing and classifying.
    pub fn from_snapshot(dice: Vec<DieSnapshot>, rule: &CritRule) -> Self {
        let total = dice.iter().map(|s| s.value).sum();
        let result = rule.classify(&dice);
        Self {
            id: OutcomeId::new(),
            dice,
            total,
            result,
            timestamp: Utc::now(),
            label: None,
        }
    }

    /// Attach a label to this outcome.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether any die of the given type participated in this roll.
    pub fn contains(&self, die: Die) -> bool {
        self.dice.iter().any(|s| s.die == die)
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|s| s.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total)?;
        if self.result != Classification::None {
            write!(f, " ({})", self.result)?;
        }
        Ok(())
    }
}
