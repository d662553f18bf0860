//! Critical/fumble classification of completed rolls.
//!
//! Classification inspects dice of a single designated type (the d20 by
//! convention): any such die on its maximum face is a critical, any on a 1
//! is a fumble, and a critical wins when both appear in the same roll, so a
//! roll is never both.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::outcome::DieSnapshot;

/// The special status of a completed roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Classification {
    /// No special status.
    #[default]
    None,
    /// A crit die landed on its maximum face.
    Critical,
    /// A crit die landed on a 1 (and none landed on its maximum).
    Fumble,
}

impl Classification {
    /// Whether this is a critical success.
    pub fn is_critical(self) -> bool {
        self == Self::Critical
    }

    /// Whether this is a critical failure.
    pub fn is_fumble(self) -> bool {
        self == Self::Fumble
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "-"),
            Self::Critical => write!(f, "Critical!"),
            Self::Fumble => write!(f, "Fumble"),
        }
    }
}

/// The rule deciding which die type triggers criticals and fumbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CritRule {
    /// The die type inspected for extreme faces.
    pub die: Die,
}

impl Default for CritRule {
    fn default() -> Self {
        Self { die: Die::D20 }
    }
}

impl CritRule {
    /// Build a rule keyed on the given die type.
    pub fn new(die: Die) -> Self {
        Self { die }
    }

    /// Classify a completed roll snapshot.
    ///
    /// Rolls with no die of the rule's type are never special. In pools with
    /// several rule dice, a maximum face anywhere takes precedence over a 1
    /// elsewhere.
    pub fn classify(&self, dice: &[DieSnapshot]) -> Classification {
        let mut saw_fumble = false;
        for snap in dice.iter().filter(|s| s.die == self.die) {
            if snap.value == self.die.sides() {
                return Classification::Critical;
            }
            if snap.value == 1 {
                saw_fumble = true;
            }
        }
        if saw_fumble {
            Classification::Fumble
        } else {
            Classification::None
        }
    }
}
