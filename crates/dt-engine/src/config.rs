//! Configuration for a roller session.

use crate::dice::Die;

/// Configuration for a roller session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// The die type inspected for critical/fumble classification.
    pub crit_die: Die,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            crit_die: Die::D20,
        }
    }
}

impl EngineConfig {
    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the die type used for crit/fumble classification.
    pub fn with_crit_die(mut self, die: Die) -> Self {
        self.crit_die = die;
        self
    }
}
