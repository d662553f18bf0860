//! Polyhedral die types and dice resident in a pool.
//!
//! Supports the standard polyhedral sizes (d4 through d100). A die that has
//! been added to a pool carries a current face value; until its first roll it
//! displays its maximum face.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// Look up a die by its face count.
    ///
    /// Only the standard polyhedral sizes are supported; anything else is
    /// rejected with [`EngineError::InvalidFaceCount`].
    pub fn from_sides(sides: u32) -> EngineResult<Self> {
        match sides {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            other => Err(EngineError::InvalidFaceCount(other)),
        }
    }

    /// Parse a die from a string like "d20", "D6", "d100".
    pub fn parse(s: &str) -> EngineResult<Self> {
        let s = s.trim().to_lowercase();
        let digits = s.strip_prefix('d').unwrap_or(&s);
        let sides: u32 = digits
            .parse()
            .map_err(|_| EngineError::InvalidFaceCount(0))?;
        Self::from_sides(sides)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Unique identifier for a die within a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieId(pub Uuid);

impl DieId {
    /// Generate a new random die ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A die resident in a pool, with its current face value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PooledDie {
    /// Identifier used to remove this die from its pool.
    pub id: DieId,
    /// The type of die.
    pub die: Die,
    value: u32,
}

impl PooledDie {
    /// Create a die showing its maximum face, as dice do before first roll.
    pub fn new(die: Die) -> Self {
        Self {
            id: DieId::new(),
            die,
            value: die.sides(),
        }
    }

    /// The current face value, always in `1..=sides`.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Assign a new face drawn uniformly from `1..=sides` and return it.
    pub fn randomize(&mut self, rng: &mut StdRng) -> u32 {
        self.value = rng.random_range(1..=self.die.sides());
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D20.sides(), 20);
        assert_eq!(Die::D100.sides(), 100);
    }

    #[test]
    fn die_from_sides() {
        assert_eq!(Die::from_sides(20).unwrap(), Die::D20);
        assert!(matches!(
            Die::from_sides(7),
            Err(EngineError::InvalidFaceCount(7))
        ));
        assert!(matches!(
            Die::from_sides(0),
            Err(EngineError::InvalidFaceCount(0))
        ));
    }

    #[test]
    fn die_parse() {
        assert_eq!(Die::parse("d20").unwrap(), Die::D20);
        assert_eq!(Die::parse("D6").unwrap(), Die::D6);
        assert_eq!(Die::parse("100").unwrap(), Die::D100);
        assert!(Die::parse("d7").is_err());
        assert!(Die::parse("foo").is_err());
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D20.to_string(), "d20");
        assert_eq!(Die::D100.to_string(), "d100");
    }

    #[test]
    fn fresh_die_shows_max_face() {
        let die = PooledDie::new(Die::D20);
        assert_eq!(die.value(), 20);
        let die = PooledDie::new(Die::D6);
        assert_eq!(die.value(), 6);
    }

    #[test]
    fn randomize_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut die = PooledDie::new(Die::D8);
        for _ in 0..1000 {
            let v = die.randomize(&mut rng);
            assert!((1..=8).contains(&v));
            assert_eq!(die.value(), v);
        }
    }

    #[test]
    fn randomize_is_uniform() {
        // 100k draws on a d6; each face expects ~16667 hits. The bound is
        // several standard deviations wide, and the RNG is seeded so the
        // test is deterministic.
        let mut rng = StdRng::seed_from_u64(42);
        let mut die = PooledDie::new(Die::D6);
        let mut counts = [0u32; 6];
        for _ in 0..100_000 {
            let v = die.randomize(&mut rng);
            counts[(v - 1) as usize] += 1;
        }
        for &count in &counts {
            assert!((15_900..=17_400).contains(&count), "skewed face: {count}");
        }
    }

    #[test]
    fn die_ids_are_unique() {
        let a = PooledDie::new(Die::D6);
        let b = PooledDie::new(Die::D6);
        assert_ne!(a.id, b.id);
    }
}
