//! Pool-value classification derived from execution history.

use std::collections::BTreeSet;

use super::execution::Outcome;

/// Buckets of pool values keyed by the outcome of the runs that used them.
///
/// Built by folding [`PoolClassification::observe`] over (value, outcome)
/// pairs in most-recent-first order. The three outcome buckets stay mutually
/// disjoint; `ever_assigned` accumulates every value seen regardless of
/// bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolClassification {
    running: BTreeSet<String>,
    functional: BTreeSet<String>,
    failed: BTreeSet<String>,
    ever_assigned: BTreeSet<String>,
}

impl PoolClassification {
    /// Empty classification, ready to fold sightings into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sighting into the classification.
    ///
    /// A running sighting always claims the value, evicting it from the
    /// terminal buckets. A terminal sighting only lands while the value is
    /// unclaimed, so with a newest-first scan the most recent terminal
    /// outcome is the one that sticks.
    #[must_use]
    pub fn observe(mut self, value: &str, outcome: Outcome) -> Self {
        self.ever_assigned.insert(value.to_string());
        match outcome {
            Outcome::Running => {
                self.functional.remove(value);
                self.failed.remove(value);
                self.running.insert(value.to_string());
            }
            Outcome::Functional => {
                if !self.failed.contains(value) && !self.running.contains(value) {
                    self.functional.insert(value.to_string());
                }
            }
            Outcome::Failed => {
                if !self.functional.contains(value) && !self.running.contains(value) {
                    self.failed.insert(value.to_string());
                }
            }
        }
        self
    }

    /// Values last seen on a still-running execution.
    pub fn running(&self) -> &BTreeSet<String> {
        &self.running
    }

    /// Values whose most recent terminal run was functional.
    pub fn functional(&self) -> &BTreeSet<String> {
        &self.functional
    }

    /// Values whose most recent terminal run failed.
    pub fn failed(&self) -> &BTreeSet<String> {
        &self.failed
    }

    /// Every value observed during the scan.
    pub fn ever_assigned(&self) -> &BTreeSet<String> {
        &self.ever_assigned
    }
}
