//! Monte Carlo strategy.

use super::config::SearchConfig;
use super::runner::RestartRunner;
use crate::model::{OptimizationResult, Order};
use crate::random::rng_for;
use crate::scoring::TardinessScore;
use rand::Rng;

/// Rationale reported with every Monte Carlo result.
pub const MONTE_CARLO_EXPLANATION: [&str; 2] = [
    "Ran Monte Carlo sampling over candidate sequences.",
    "Chose the sequence with minimal simulated tardiness.",
];

/// Best-of-N random permutations under [`TardinessScore`].
///
/// Samples more densely than [`GeneticStrategy`](super::GeneticStrategy)
/// by default (50 trials against 20).
#[derive(Debug, Clone)]
pub struct MonteCarloStrategy {
    config: SearchConfig,
}

impl MonteCarloStrategy {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the sampling with the caller's random source.
    pub fn run<R: Rng + ?Sized>(&self, orders: &[Order], rng: &mut R) -> OptimizationResult {
        let outcome = RestartRunner::run(orders, &TardinessScore, &self.config, rng);
        OptimizationResult::new(
            outcome.sequence(orders),
            &MONTE_CARLO_EXPLANATION,
            outcome.best_score,
        )
    }

    /// Runs with a generator built from `config.seed`.
    pub fn run_seeded(&self, orders: &[Order]) -> OptimizationResult {
        self.run(orders, &mut rng_for(self.config.seed))
    }
}

impl Default for MonteCarloStrategy {
    fn default() -> Self {
        Self::new(SearchConfig::monte_carlo())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::scoring::SequenceScore;

    fn orders() -> Vec<Order> {
        vec![
            Order::new("A", 100.0, "3"),
            Order::new("B", 50.0, "1"),
            Order::new("C", 200.0, "2"),
        ]
    }

    #[test]
    fn test_empty_input() {
        let result = MonteCarloStrategy::default().run(&[], &mut create_rng(1));
        assert!(result.suggested.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.explanation, MONTE_CARLO_EXPLANATION);
    }

    #[test]
    fn test_finds_zero_tardiness() {
        // B(1), C(2), A(3) is on time everywhere; the identity A, B, C is not.
        let strategy = MonteCarloStrategy::new(SearchConfig::monte_carlo().with_trials(200));
        let result = strategy.run(&orders(), &mut create_rng(2));
        assert_eq!(result.score, 0);
        assert_eq!(result.suggested_ids(), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_score_matches_suggested() {
        let result = MonteCarloStrategy::default().run(&orders(), &mut create_rng(5));
        assert_eq!(result.score, TardinessScore.score(&result.suggested));
    }

    #[test]
    fn test_default_trials() {
        assert_eq!(MonteCarloStrategy::default().config().trials, 50);
    }
}
