//! The uniform result envelope returned by every strategy.

use super::Order;

/// Outcome of one optimization call.
///
/// `score` is lower-is-better, but each strategy computes it with its own
/// formula. Scores from different strategies must never be ranked against
/// each other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// The chosen loading sequence, a permutation of the input.
    pub suggested: Vec<Order>,

    /// Rationale lines, read top to bottom.
    pub explanation: Vec<String>,

    pub score: i64,
}

impl OptimizationResult {
    pub(crate) fn new(suggested: Vec<Order>, explanation: &[&str], score: i64) -> Self {
        Self {
            suggested,
            explanation: explanation.iter().map(|line| (*line).to_string()).collect(),
            score,
        }
    }

    /// Ids of the suggested sequence, in order.
    pub fn suggested_ids(&self) -> Vec<&str> {
        self.suggested.iter().map(|o| o.id.as_str()).collect()
    }
}
