//! Rule composition engine.

use std::cmp::Ordering;

/// Priority value produced by a rule. Lower ranks first.
///
/// Integer ranks compare exactly over the whole `i64` range. Float ranks
/// compare with NaN last and `-0.0 == 0.0`. A rule should stick to one
/// variant; across variants integers rank before floats.
#[derive(Debug, Clone, Copy)]
pub enum Rank {
    Int(i64),
    Float(f64),
}

impl Rank {
    fn normalized(self) -> Self {
        match self {
            Rank::Float(v) if v.is_nan() => Rank::Float(f64::INFINITY),
            Rank::Float(v) => Rank::Float(v + 0.0),
            int => int,
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.normalized(), other.normalized()) {
            (Rank::Int(a), Rank::Int(b)) => a.cmp(&b),
            (Rank::Float(a), Rank::Float(b)) => a.total_cmp(&b),
            (Rank::Int(_), Rank::Float(_)) => Ordering::Less,
            (Rank::Float(_), Rank::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl From<i64> for Rank {
    fn from(v: i64) -> Self {
        Rank::Int(v)
    }
}

impl From<f64> for Rank {
    fn from(v: f64) -> Self {
        Rank::Float(v)
    }
}

/// A scoring rule that assigns a priority value to an item.
///
/// Lower ranks mean higher priority.
pub trait PriorityRule<T>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the priority rank of the given item.
    fn score(&self, item: &T) -> Rank;
}

/// Applies rules in order, consulting each later rule only on ties.
///
/// # Examples
///
/// ```
/// use rake_optim::dispatching::{EarliestDue, HeaviestLoad, RuleEngine};
/// use rake_optim::model::Order;
///
/// let engine = RuleEngine::new().with_rule(EarliestDue).with_rule(HeaviestLoad);
/// let orders = vec![Order::new("A", 100.0, "5"), Order::new("B", 50.0, "2")];
/// assert_eq!(engine.sort_indices(&orders), vec![1, 0]);
/// ```
pub struct RuleEngine<T> {
    rules: Vec<Box<dyn PriorityRule<T>>>,
}

impl<T> RuleEngine<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: PriorityRule<T> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts items by priority (lowest score first).
    ///
    /// Returns indices into `items`. The sort is stable, so items tied on
    /// every rule keep their input order. NaN scores rank last.
    pub fn sort_indices(&self, items: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }

        let ranks: Vec<Vec<Rank>> = items
            .iter()
            .map(|item| self.rules.iter().map(|r| r.score(item)).collect())
            .collect();

        indices.sort_by(|&a, &b| {
            ranks[a]
                .iter()
                .zip(&ranks[b])
                .map(|(va, vb)| va.cmp(vb))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        indices
    }

    /// Sorts items by priority and returns references in sorted order.
    pub fn sort<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.sort_indices(items)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }
}

impl<T> Default for RuleEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        value: f64,
        weight: f64,
    }

    struct ByValue;
    impl PriorityRule<Item> for ByValue {
        fn name(&self) -> &str {
            "ByValue"
        }
        fn score(&self, item: &Item) -> Rank {
            item.value.into()
        }
    }

    struct ByWeight;
    impl PriorityRule<Item> for ByWeight {
        fn name(&self) -> &str {
            "ByWeight"
        }
        fn score(&self, item: &Item) -> Rank {
            item.weight.into()
        }
    }

    fn items(pairs: &[(f64, f64)]) -> Vec<Item> {
        pairs
            .iter()
            .map(|&(value, weight)| Item { value, weight })
            .collect()
    }

    #[test]
    fn test_single_rule_sort() {
        let engine = RuleEngine::new().with_rule(ByValue);
        let items = items(&[(3.0, 1.0), (1.0, 2.0), (2.0, 1.0)]);
        assert_eq!(engine.sort_indices(&items), vec![1, 2, 0]);
    }

    #[test]
    fn test_sequential_tie_breaking() {
        let engine = RuleEngine::new().with_rule(ByValue).with_rule(ByWeight);
        let items = items(&[(3.0, 1.0), (1.0, 3.0), (2.0, 1.0), (1.0, 2.0)]);
        let sorted = engine.sort(&items);

        assert_eq!(sorted[0].weight, 2.0);
        assert_eq!(sorted[1].weight, 3.0);
        assert_eq!(sorted[2].value, 2.0);
        assert_eq!(sorted[3].value, 3.0);
    }

    #[test]
    fn test_full_tie_preserves_order() {
        let engine = RuleEngine::new().with_rule(ByValue).with_rule(ByWeight);
        let items = items(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(engine.sort_indices(&items), vec![0, 1, 2]);
    }

    #[test]
    fn test_nan_scores_rank_last() {
        let engine = RuleEngine::new().with_rule(ByValue).with_rule(ByWeight);
        let items = items(&[(f64::NAN, 2.0), (f64::NAN, 1.0), (5.0, 9.0)]);
        assert_eq!(engine.sort_indices(&items), vec![2, 1, 0]);
    }

    #[test]
    fn test_int_ranks_compare_exactly() {
        // 2^53 and 2^53 + 1 collapse to the same f64.
        let a = Rank::Int(9_007_199_254_740_993);
        let b = Rank::Int(9_007_199_254_740_992);
        assert!(b < a);
        assert_ne!(a, b);
        assert_eq!(Rank::Int(i64::MAX).cmp(&Rank::Int(i64::MAX - 1)), Ordering::Greater);
    }

    #[test]
    fn test_float_rank_normalization() {
        assert_eq!(Rank::Float(-0.0), Rank::Float(0.0));
        assert!(Rank::Float(f64::NAN) > Rank::Float(1e300));
        assert!(Rank::Int(i64::MAX) < Rank::Float(f64::NEG_INFINITY));
    }

    #[test]
    fn test_no_rules_keeps_input_order() {
        let engine = RuleEngine::<Item>::new();
        let items = items(&[(3.0, 1.0), (1.0, 1.0)]);
        assert_eq!(engine.sort_indices(&items), vec![0, 1]);
    }

    #[test]
    fn test_empty_items() {
        let engine = RuleEngine::new().with_rule(ByValue);
        assert!(engine.sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_rule_names() {
        let engine = RuleEngine::<Item>::new().with_rule(ByValue).with_rule(ByWeight);
        assert_eq!(engine.rule_names(), vec!["ByValue", "ByWeight"]);
        assert_eq!(engine.rule_count(), 2);
    }
}
