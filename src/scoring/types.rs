//! Core trait for sequence scoring.

use crate::model::Order;

/// A pure scoring rule over a loading sequence.
///
/// The score is the saturating sum of [`term`](SequenceScore::term) over
/// every position. Implementations must be deterministic: the same
/// sequence always yields the same score.
///
/// # Examples
///
/// ```
/// use rake_optim::model::Order;
/// use rake_optim::scoring::{SequenceScore, WeightedDueScore};
///
/// let seq = vec![Order::new("A", 10.0, "2"), Order::new("B", 10.0, "3")];
/// // 2*1 + 3*2
/// assert_eq!(WeightedDueScore.score(&seq), 8);
/// ```
pub trait SequenceScore: Send + Sync {
    /// Short rule name.
    fn name(&self) -> &'static str;

    /// Contribution of an order due in `due_days` placed at zero-based
    /// `position`.
    fn term(&self, due_days: i64, position: usize) -> i64;

    /// Scores a whole sequence. Empty sequences score `0`.
    fn score<'a, I>(&self, sequence: I) -> i64
    where
        I: IntoIterator<Item = &'a Order>,
    {
        sequence
            .into_iter()
            .enumerate()
            .fold(0i64, |acc, (i, order)| {
                acc.saturating_add(self.term(order.due_days(), i))
            })
    }
}
