//! Append-only roll history with derived statistics.

use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::outcome::RollOutcome;

/// Aggregate counters derived from a ledger's outcomes.
///
/// These are maintained incrementally on append but are always recomputable
/// from the outcome sequence; the sequence is the authoritative record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Number of recorded rolls.
    pub rolls: u64,
    /// Number of critical rolls.
    pub criticals: u64,
    /// Number of fumbled rolls.
    pub fumbles: u64,
    /// Sum of all roll totals.
    pub grand_total: u64,
}

impl LedgerStats {
    fn absorb(&mut self, outcome: &RollOutcome) {
        self.rolls += 1;
        if outcome.result.is_critical() {
            self.criticals += 1;
        }
        if outcome.result.is_fumble() {
            self.fumbles += 1;
        }
        self.grand_total += u64::from(outcome.total);
    }

    fn recompute(outcomes: &[RollOutcome]) -> Self {
        let mut stats = Self::default();
        for outcome in outcomes {
            stats.absorb(outcome);
        }
        stats
    }
}

/// One bar of a bucketed frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Human-readable range label, e.g. "6-10" or "21+".
    pub label: String,
    /// Number of roll totals falling in this range.
    pub count: u64,
}

/// A chronological, append-only log of roll outcomes.
///
/// Entries are never mutated or removed individually; the only destructive
/// operation is a bulk [`HistoryLedger::reset`]. All queries are pure and
/// return empty results on an empty ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLedger {
    outcomes: Vec<RollOutcome>,
    stats: LedgerStats,
}

impl HistoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a ledger from previously serialized outcomes.
    ///
    /// Counters are rebuilt from the entries; restored outcomes are
    /// indistinguishable from freshly appended ones.
    pub fn from_outcomes(outcomes: Vec<RollOutcome>) -> Self {
        let stats = LedgerStats::recompute(&outcomes);
        Self { outcomes, stats }
    }

    /// Append an outcome and update the derived counters in the same step.
    pub fn append(&mut self, outcome: RollOutcome) {
        self.stats.absorb(&outcome);
        self.outcomes.push(outcome);
    }

    /// Clear all outcomes and counters.
    pub fn reset(&mut self) {
        self.outcomes.clear();
        self.stats = LedgerStats::default();
    }

    /// All outcomes in chronological order.
    pub fn outcomes(&self) -> &[RollOutcome] {
        &self.outcomes
    }

    /// Number of recorded rolls.
    pub fn total_rolls(&self) -> u64 {
        self.stats.rolls
    }

    /// Whether the ledger has no entries.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// The derived aggregate counters.
    pub fn stats(&self) -> LedgerStats {
        self.stats
    }

    /// Count roll totals into ranges bounded by the given upper-inclusive
    /// boundaries, plus a final open-ended bucket.
    ///
    /// Boundaries must be ascending; `[5, 10]` yields buckets "1-5", "6-10",
    /// and "11+".
    pub fn bucketed_frequencies(&self, boundaries: &[u32]) -> Vec<Bucket> {
        let mut buckets = Vec::with_capacity(boundaries.len() + 1);
        let mut low = 1u32;
        for &high in boundaries {
            let label = if low == high {
                format!("{high}")
            } else {
                format!("{low}-{high}")
            };
            let count = self
                .outcomes
                .iter()
                .filter(|o| o.total >= low && o.total <= high)
                .count() as u64;
            buckets.push(Bucket { label, count });
            // A boundary of u32::MAX leaves an empty open bucket.
            low = high.saturating_add(1);
        }
        let count = self.outcomes.iter().filter(|o| o.total >= low).count() as u64;
        buckets.push(Bucket {
            label: format!("{low}+"),
            count,
        });
        buckets
    }

    /// Outcomes that included at least one die of the given type, in
    /// chronological order.
    pub fn filtered_by(&self, die: Die) -> Vec<&RollOutcome> {
        self.outcomes.iter().filter(|o| o.contains(die)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CritRule;
    use crate::outcome::DieSnapshot;

    fn outcome(values: &[(Die, u32)]) -> RollOutcome {
        let dice = values
            .iter()
            .map(|&(die, value)| DieSnapshot { die, value })
            .collect();
        RollOutcome::from_snapshot(dice, &CritRule::default())
    }

    #[test]
    fn empty_ledger_queries() {
        let ledger = HistoryLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_rolls(), 0);
        assert_eq!(ledger.stats(), LedgerStats::default());
        assert!(ledger.filtered_by(Die::D20).is_empty());
        let buckets = ledger.bucketed_frequencies(&[5, 10]);
        assert_eq!(buckets.len(), 3);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn append_increments_count() {
        let mut ledger = HistoryLedger::new();
        ledger.append(outcome(&[(Die::D20, 12)]));
        assert_eq!(ledger.total_rolls(), 1);
        ledger.append(outcome(&[(Die::D6, 3)]));
        assert_eq!(ledger.total_rolls(), 2);
    }

    #[test]
    fn stats_track_crits_and_totals() {
        let mut ledger = HistoryLedger::new();
        ledger.append(outcome(&[(Die::D20, 20)]));
        ledger.append(outcome(&[(Die::D20, 1)]));
        ledger.append(outcome(&[(Die::D6, 4), (Die::D6, 2)]));
        let stats = ledger.stats();
        assert_eq!(stats.rolls, 3);
        assert_eq!(stats.criticals, 1);
        assert_eq!(stats.fumbles, 1);
        assert_eq!(stats.grand_total, 20 + 1 + 6);
    }

    #[test]
    fn counters_are_recomputable() {
        let mut ledger = HistoryLedger::new();
        for total in [20u32, 1, 15, 7] {
            ledger.append(outcome(&[(Die::D20, total)]));
        }
        let rebuilt = HistoryLedger::from_outcomes(ledger.outcomes().to_vec());
        assert_eq!(rebuilt.stats(), ledger.stats());
    }

    #[test]
    fn reset_clears_everything() {
        let mut ledger = HistoryLedger::new();
        ledger.append(outcome(&[(Die::D20, 20)]));
        ledger.reset();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_rolls(), 0);
        assert_eq!(ledger.stats(), LedgerStats::default());
        assert!(
            ledger
                .bucketed_frequencies(&[10])
                .iter()
                .all(|b| b.count == 0)
        );
    }

    #[test]
    fn buckets_partition_totals() {
        let mut ledger = HistoryLedger::new();
        for total in [3u32, 5, 6, 10, 11, 19, 20, 20] {
            ledger.append(outcome(&[(Die::D20, total.min(20))]));
        }
        let buckets = ledger.bucketed_frequencies(&[5, 10, 15, 19]);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0].label, "1-5");
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].label, "6-10");
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets[2].label, "11-15");
        assert_eq!(buckets[2].count, 1);
        assert_eq!(buckets[3].label, "16-19");
        assert_eq!(buckets[3].count, 1);
        assert_eq!(buckets[4].label, "20+");
        assert_eq!(buckets[4].count, 2);
    }

    #[test]
    fn single_value_bucket_label() {
        let mut ledger = HistoryLedger::new();
        ledger.append(outcome(&[(Die::D20, 20)]));
        let buckets = ledger.bucketed_frequencies(&[19, 20]);
        assert_eq!(buckets[1].label, "20");
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets[2].label, "21+");
        assert_eq!(buckets[2].count, 0);
    }

    #[test]
    fn max_boundary_does_not_overflow() {
        let mut ledger = HistoryLedger::new();
        ledger.append(outcome(&[(Die::D20, 20)]));
        let buckets = ledger.bucketed_frequencies(&[u32::MAX]);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].label, format!("{}+", u32::MAX));
        assert_eq!(buckets[1].count, 0);
    }

    #[test]
    fn filter_by_die_type() {
        let mut ledger = HistoryLedger::new();
        ledger.append(outcome(&[(Die::D20, 14)]));
        ledger.append(outcome(&[(Die::D6, 2), (Die::D6, 5)]));
        ledger.append(outcome(&[(Die::D20, 9), (Die::D6, 1)]));
        assert_eq!(ledger.filtered_by(Die::D20).len(), 2);
        assert_eq!(ledger.filtered_by(Die::D6).len(), 2);
        assert!(ledger.filtered_by(Die::D100).is_empty());
    }

    #[test]
    fn queries_are_idempotent() {
        let mut ledger = HistoryLedger::new();
        ledger.append(outcome(&[(Die::D20, 8)]));
        ledger.append(outcome(&[(Die::D20, 17)]));
        let a = ledger.bucketed_frequencies(&[10]);
        let b = ledger.bucketed_frequencies(&[10]);
        assert_eq!(a, b);
        let fa: Vec<_> = ledger.filtered_by(Die::D20).iter().map(|o| o.id).collect();
        let fb: Vec<_> = ledger.filtered_by(Die::D20).iter().map(|o| o.id).collect();
        assert_eq!(fa, fb);
    }

    #[test]
    fn chronological_order_preserved() {
        let mut ledger = HistoryLedger::new();
        let first = outcome(&[(Die::D6, 1)]);
        let second = outcome(&[(Die::D6, 6)]);
        let (id1, id2) = (first.id, second.id);
        ledger.append(first);
        ledger.append(second);
        assert_eq!(ledger.outcomes()[0].id, id1);
        assert_eq!(ledger.outcomes()[1].id, id2);
    }

    #[test]
    fn serde_roundtrip() {
        let mut ledger = HistoryLedger::new();
        ledger.append(outcome(&[(Die::D20, 20)]));
        ledger.append(outcome(&[(Die::D8, 3)]));
        let json = serde_json::to_string(&ledger).unwrap();
        let back: HistoryLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_rolls(), 2);
        assert_eq!(back.stats(), ledger.stats());
    }
}
