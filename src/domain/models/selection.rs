//! Value selection over a classified candidate pool.

use serde::{Deserialize, Serialize};

use super::classification::PoolClassification;
use super::pool::CandidatePool;

/// Which priority tier produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTier {
    /// Prefer-error reassignment of a value whose last run failed.
    ReproducedFailure,
    /// A value never seen in the scanned history.
    Unused,
    /// Recycled from a run that finished functional.
    RecycledFunctional,
    /// Recycled from a run that failed; nothing better was left.
    RecycledFailed,
}

impl SelectionTier {
    /// Stable lowercase name, for logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReproducedFailure => "reproduced_failure",
            Self::Unused => "unused",
            Self::RecycledFunctional => "recycled_functional",
            Self::RecycledFailed => "recycled_failed",
        }
    }
}

/// A chosen pool value and the tier that justified it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The value to hand to the current execution.
    pub value: String,
    /// Why this value won.
    pub tier: SelectionTier,
}

/// Pick the best value from `pool` given the classified history.
///
/// Tiers, in order: with `prefer_error` set, a value whose last run failed;
/// then a never-assigned value; then one whose last run was functional; then
/// one whose last run failed. Each tier scans the pool in its own order and
/// takes the first hit. Returns `None` when no tier produces a value (every
/// candidate claimed by a running execution, or the pool is empty).
pub fn select_value(
    pool: &CandidatePool,
    classification: &PoolClassification,
    prefer_error: bool,
) -> Option<Selection> {
    if prefer_error {
        if let Some(value) = pool.iter().find(|v| classification.failed().contains(*v)) {
            return Some(Selection {
                value: value.to_string(),
                tier: SelectionTier::ReproducedFailure,
            });
        }
    }

    if let Some(value) = pool
        .iter()
        .find(|v| !classification.ever_assigned().contains(*v))
    {
        return Some(Selection {
            value: value.to_string(),
            tier: SelectionTier::Unused,
        });
    }

    if let Some(value) = pool
        .iter()
        .find(|v| classification.functional().contains(*v))
    {
        return Some(Selection {
            value: value.to_string(),
            tier: SelectionTier::RecycledFunctional,
        });
    }

    pool.iter()
        .find(|v| classification.failed().contains(*v))
        .map(|value| Selection {
            value: value.to_string(),
            tier: SelectionTier::RecycledFailed,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::execution::Outcome;

    fn pool(spec: &str) -> CandidatePool {
        CandidatePool::parse(spec)
    }

    #[test]
    fn test_unused_value_beats_recycling() {
        let class = PoolClassification::new().observe("a", Outcome::Functional);
        let selection = select_value(&pool("a, b, c"), &class, false).unwrap();
        assert_eq!(selection.value, "b");
        assert_eq!(selection.tier, SelectionTier::Unused);
    }

    #[test]
    fn test_prefer_error_takes_failed_value_first() {
        let class = PoolClassification::new()
            .observe("a", Outcome::Failed)
            .observe("b", Outcome::Functional);
        let selection = select_value(&pool("a, b"), &class, true).unwrap();
        assert_eq!(selection.value, "a");
        assert_eq!(selection.tier, SelectionTier::ReproducedFailure);
    }

    #[test]
    fn test_prefer_error_falls_through_without_failures() {
        let class = PoolClassification::new().observe("a", Outcome::Functional);
        let selection = select_value(&pool("a, b"), &class, true).unwrap();
        assert_eq!(selection.value, "b");
        assert_eq!(selection.tier, SelectionTier::Unused);
    }

    #[test]
    fn test_functional_recycled_before_failed() {
        let class = PoolClassification::new()
            .observe("a", Outcome::Failed)
            .observe("b", Outcome::Functional);
        let selection = select_value(&pool("a, b"), &class, false).unwrap();
        assert_eq!(selection.value, "b");
        assert_eq!(selection.tier, SelectionTier::RecycledFunctional);
    }

    #[test]
    fn test_failed_value_is_last_resort() {
        let class = PoolClassification::new()
            .observe("a", Outcome::Failed)
            .observe("b", Outcome::Running);
        let selection = select_value(&pool("a, b"), &class, false).unwrap();
        assert_eq!(selection.value, "a");
        assert_eq!(selection.tier, SelectionTier::RecycledFailed);
    }

    #[test]
    fn test_all_values_running_yields_none() {
        let class = PoolClassification::new().observe("a", Outcome::Running);
        assert!(select_value(&pool("a"), &class, false).is_none());
        assert!(select_value(&pool("a"), &class, true).is_none());
    }

    #[test]
    fn test_empty_pool_yields_none() {
        let class = PoolClassification::new();
        assert!(select_value(&pool(""), &class, false).is_none());
    }

    #[test]
    fn test_pool_order_decides_ties() {
        let class = PoolClassification::new()
            .observe("vm2", Outcome::Functional)
            .observe("vm3", Outcome::Functional);
        // Descending pool order: the first functional hit in pool order wins.
        let selection = select_value(&pool("vm[3..1]"), &class, false).unwrap();
        assert_eq!(selection.value, "vm1");
        assert_eq!(selection.tier, SelectionTier::Unused);

        let class = class.observe("vm1", Outcome::Running);
        let selection = select_value(&pool("vm[3..1]"), &class, false).unwrap();
        assert_eq!(selection.value, "vm3");
        assert_eq!(selection.tier, SelectionTier::RecycledFunctional);
    }
}
