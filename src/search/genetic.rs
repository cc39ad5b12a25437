//! Genetic-style strategy.
//!
//! Named for the planner's vocabulary, but it is repeated random restart:
//! no crossover, mutation or fitness-proportional selection.

use super::config::SearchConfig;
use super::runner::RestartRunner;
use crate::model::{OptimizationResult, Order};
use crate::random::rng_for;
use crate::scoring::WeightedDueScore;
use rand::Rng;

/// Rationale reported with every genetic-style result.
pub const GENETIC_EXPLANATION: [&str; 2] = [
    "Generated randomized permutations (genetic search) and evaluated a lateness proxy.",
    "Selected the lowest-score ordering as the current best solution.",
];

/// Best-of-N random permutations under [`WeightedDueScore`].
#[derive(Debug, Clone)]
pub struct GeneticStrategy {
    config: SearchConfig,
}

impl GeneticStrategy {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search with the caller's random source.
    pub fn run<R: Rng + ?Sized>(&self, orders: &[Order], rng: &mut R) -> OptimizationResult {
        let outcome = RestartRunner::run(orders, &WeightedDueScore, &self.config, rng);
        OptimizationResult::new(
            outcome.sequence(orders),
            &GENETIC_EXPLANATION,
            outcome.best_score,
        )
    }

    /// Runs with a generator built from `config.seed`.
    pub fn run_seeded(&self, orders: &[Order]) -> OptimizationResult {
        self.run(orders, &mut rng_for(self.config.seed))
    }
}

impl Default for GeneticStrategy {
    fn default() -> Self {
        Self::new(SearchConfig::genetic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::scoring::SequenceScore;

    fn orders() -> Vec<Order> {
        vec![
            Order::new("A", 100.0, "5"),
            Order::new("B", 50.0, "2"),
            Order::new("C", 200.0, "2"),
            Order::new("D", 75.0, "7"),
        ]
    }

    #[test]
    fn test_empty_input() {
        let result = GeneticStrategy::default().run(&[], &mut create_rng(1));
        assert!(result.suggested.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.explanation, GENETIC_EXPLANATION);
    }

    #[test]
    fn test_score_matches_suggested() {
        let result = GeneticStrategy::default().run(&orders(), &mut create_rng(9));
        assert_eq!(result.score, WeightedDueScore.score(&result.suggested));
    }

    #[test]
    fn test_finds_optimum_on_small_input() {
        // Weighted due is minimized by descending due: D, A, then B/C.
        let strategy = GeneticStrategy::new(SearchConfig::genetic().with_trials(500));
        let result = strategy.run(&orders(), &mut create_rng(4));
        // 7*1 + 5*2 + 2*3 + 2*4
        assert_eq!(result.score, 31);
        assert_eq!(&result.suggested_ids()[..2], &["D", "A"]);
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let strategy = GeneticStrategy::new(SearchConfig::genetic().with_seed(123));
        assert_eq!(strategy.run_seeded(&orders()), strategy.run_seeded(&orders()));
    }
}
