//! Greedy dispatching strategy.
//!
//! Sorts by earliest due date, then heaviest load, in one deterministic
//! pass. This is the fast baseline and the fallback for unknown
//! selectors.

use crate::dispatching::{EarliestDue, HeaviestLoad, RuleEngine};
use crate::model::{OptimizationResult, Order};
use crate::scoring::{ArrivalScore, SequenceScore};

/// Rationale reported with every greedy result.
pub const GREEDY_EXPLANATION: [&str; 2] = [
    "Sorted by earliest due date to reduce lateness.",
    "For equal due dates, prioritized heavier loads first to utilize wagons efficiently.",
];

/// Earliest-due, heaviest-first ordering.
///
/// # Examples
///
/// ```
/// use rake_optim::greedy::GreedyStrategy;
/// use rake_optim::model::Order;
///
/// let orders = vec![
///     Order::new("A", 100.0, "5"),
///     Order::new("B", 50.0, "2"),
///     Order::new("C", 200.0, "2"),
/// ];
/// let result = GreedyStrategy::new().run(&orders);
/// assert_eq!(result.suggested_ids(), vec!["C", "B", "A"]);
/// ```
pub struct GreedyStrategy {
    engine: RuleEngine<Order>,
}

impl GreedyStrategy {
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(EarliestDue)
                .with_rule(HeaviestLoad),
        }
    }

    /// The greedy order, borrowing from `orders`.
    pub fn sequence<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        self.engine.sort(orders)
    }

    /// Sequences `orders` and scores the result with [`ArrivalScore`].
    pub fn run(&self, orders: &[Order]) -> OptimizationResult {
        let sequence = self.sequence(orders);
        let score = ArrivalScore.score(sequence.iter().copied());
        OptimizationResult::new(
            sequence.into_iter().cloned().collect(),
            &GREEDY_EXPLANATION,
            score,
        )
    }
}

impl Default for GreedyStrategy {
    fn default() -> Self {
        Self::new()
    }
}
