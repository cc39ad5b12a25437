//! Random-restart permutation search.
//!
//! Both stochastic strategies share this engine: sample full random
//! permutations of the input, score each with the strategy's own
//! [`SequenceScore`](crate::scoring::SequenceScore), keep the best.
//!
//! - [`GeneticStrategy`]: 20 trials under the weighted due score
//! - [`MonteCarloStrategy`]: 50 trials under the tardiness score
//!
//! The trial count is fixed per run, which bounds latency at the cost of
//! search quality. The random source is always supplied by the caller.

mod config;
mod genetic;
mod monte_carlo;
mod runner;

pub use config::SearchConfig;
pub use genetic::{GeneticStrategy, GENETIC_EXPLANATION};
pub use monte_carlo::{MonteCarloStrategy, MONTE_CARLO_EXPLANATION};
pub use runner::{RestartRunner, SearchOutcome};
