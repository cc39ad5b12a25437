//! Built-in scoring rules.

use super::SequenceScore;

fn ordinal(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}

/// Rewards small due values and early placement: `due + i`.
///
/// Reported alongside greedy results; never searched over.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalScore;

impl SequenceScore for ArrivalScore {
    fn name(&self) -> &'static str {
        "arrival"
    }

    fn term(&self, due_days: i64, position: usize) -> i64 {
        due_days.saturating_add(ordinal(position))
    }
}

/// Due value weighted by 1-based position: `due * (i + 1)`.
///
/// Placing a late-due order early costs more than placing it late.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedDueScore;

impl SequenceScore for WeightedDueScore {
    fn name(&self) -> &'static str {
        "weighted-due"
    }

    fn term(&self, due_days: i64, position: usize) -> i64 {
        due_days.saturating_mul(ordinal(position).saturating_add(1))
    }
}

/// Tardiness proxy: `max(0, (i + 1) - due)`.
///
/// Only positions past an order's due value count.
#[derive(Debug, Clone, Copy, Default)]
pub struct TardinessScore;

impl SequenceScore for TardinessScore {
    fn name(&self) -> &'static str {
        "tardiness"
    }

    fn term(&self, due_days: i64, position: usize) -> i64 {
        ordinal(position)
            .saturating_add(1)
            .saturating_sub(due_days)
            .max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;

    fn seq(dues: &[&str]) -> Vec<Order> {
        dues.iter()
            .enumerate()
            .map(|(i, d)| Order::new(format!("O{i}"), 10.0, *d))
            .collect()
    }

    #[test]
    fn test_empty_sequences_score_zero() {
        let empty: Vec<Order> = Vec::new();
        assert_eq!(ArrivalScore.score(&empty), 0);
        assert_eq!(WeightedDueScore.score(&empty), 0);
        assert_eq!(TardinessScore.score(&empty), 0);
    }

    #[test]
    fn test_arrival_score() {
        // (2+0) + (2+1) + (5+2)
        assert_eq!(ArrivalScore.score(&seq(&["2", "2", "5"])), 12);
    }

    #[test]
    fn test_weighted_due_score() {
        // 5*1 + 2*2 + 2*3
        assert_eq!(WeightedDueScore.score(&seq(&["5", "2", "2"])), 15);
        // 2*1 + 2*2 + 5*3
        assert_eq!(WeightedDueScore.score(&seq(&["2", "2", "5"])), 21);
    }

    #[test]
    fn test_tardiness_score() {
        // max(0,1-1) + max(0,2-1) + max(0,3-5)
        assert_eq!(TardinessScore.score(&seq(&["1", "1", "5"])), 1);
        // max(0,1-0) + max(0,2-0)
        assert_eq!(TardinessScore.score(&seq(&["0", "0"])), 3);
    }

    #[test]
    fn test_unreadable_due_counts_as_zero() {
        assert_eq!(ArrivalScore.score(&seq(&["soon"])), 0);
        assert_eq!(WeightedDueScore.score(&seq(&["soon", "x"])), 0);
        assert_eq!(TardinessScore.score(&seq(&["soon"])), 1);
    }

    #[test]
    fn test_scores_saturate() {
        let s = seq(&["99999999999999999999", "99999999999999999999"]);
        assert_eq!(ArrivalScore.score(&s), i64::MAX);
        assert_eq!(WeightedDueScore.score(&s), i64::MAX);
        assert_eq!(TardinessScore.score(&s), 0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let s = seq(&["3", "1", "4", "1", "5"]);
        assert_eq!(WeightedDueScore.score(&s), WeightedDueScore.score(&s));
        assert_eq!(TardinessScore.score(&s), TardinessScore.score(&s));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ArrivalScore.name(), "arrival");
        assert_eq!(WeightedDueScore.name(), "weighted-due");
        assert_eq!(TardinessScore.name(), "tardiness");
    }
}
