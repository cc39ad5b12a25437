//! Optimization facade.
//!
//! One entry point for all strategies: pick an [`Algorithm`], hand over
//! the orders, get back an [`OptimizationResult`]. Exactly one strategy
//! runs per call and its result is returned unmodified.
//!
//! Calls are stateless and reentrant. Each stochastic call builds its own
//! generator, so an [`Optimizer`] can be shared across threads.
//!
//! ```
//! use rake_optim::model::Order;
//! use rake_optim::optimizer::{optimize, Algorithm};
//!
//! let orders = vec![Order::new("A", 100.0, "5"), Order::new("B", 50.0, "2")];
//! let result = optimize(&orders, Some("greedy"));
//! assert_eq!(result.suggested_ids(), vec!["B", "A"]);
//!
//! let fallback = optimize(&orders, Some("unknown"));
//! assert_eq!(fallback, result);
//! ```

mod algorithm;
mod config;
#[cfg(feature = "serde")]
mod request;

pub use algorithm::Algorithm;
pub use config::OptimizerConfig;
#[cfg(feature = "serde")]
pub use request::OptimizeRequest;

use crate::error::ConfigError;
use crate::greedy::GreedyStrategy;
use crate::model::{OptimizationResult, Order, RakeLoad};
use crate::random::rng_for;
use crate::search::{GeneticStrategy, MonteCarloStrategy};
use rand::rngs::StdRng;
use rand::Rng;

/// Dispatches optimization calls to the configured strategies.
pub struct Optimizer {
    config: OptimizerConfig,
    greedy: GreedyStrategy,
    genetic: GeneticStrategy,
    monte_carlo: MonteCarloStrategy,
}

impl Optimizer {
    /// Builds an optimizer from a validated configuration.
    pub fn new(config: OptimizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            greedy: GreedyStrategy::new(),
            genetic: GeneticStrategy::new(config.genetic.clone()),
            monte_carlo: MonteCarloStrategy::new(config.monte_carlo.clone()),
            config,
        })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Runs `algorithm` over `orders` with a fresh per-call generator.
    ///
    /// The generator is seeded from the optimizer seed, else the strategy's
    /// search seed, else fresh entropy.
    pub fn optimize(&self, orders: &[Order], algorithm: Algorithm) -> OptimizationResult {
        match self.call_rng(algorithm) {
            Some(mut rng) => self.optimize_with_rng(orders, algorithm, &mut rng),
            None => self.greedy.run(orders),
        }
    }

    /// Generator for one call, or `None` for strategies that draw nothing.
    fn call_rng(&self, algorithm: Algorithm) -> Option<StdRng> {
        let search_seed = match algorithm {
            Algorithm::Greedy => return None,
            Algorithm::Genetic => self.genetic.config().seed,
            Algorithm::MonteCarlo => self.monte_carlo.config().seed,
        };
        Some(rng_for(self.config.seed.or(search_seed)))
    }

    /// Runs `algorithm` with the caller's random source.
    ///
    /// Greedy ignores `rng`.
    pub fn optimize_with_rng<R: Rng + ?Sized>(
        &self,
        orders: &[Order],
        algorithm: Algorithm,
        rng: &mut R,
    ) -> OptimizationResult {
        match algorithm {
            Algorithm::Greedy => self.greedy.run(orders),
            Algorithm::Genetic => self.genetic.run(orders, rng),
            Algorithm::MonteCarlo => self.monte_carlo.run(orders, rng),
        }
    }

    /// Runs the strategy named by a wire selector. Unknown names run greedy.
    pub fn optimize_selector(&self, orders: &[Order], selector: Option<&str>) -> OptimizationResult {
        self.optimize(orders, Algorithm::from_selector(selector))
    }

    /// Handles a decoded wire request.
    #[cfg(feature = "serde")]
    pub fn handle(&self, request: &OptimizeRequest) -> OptimizationResult {
        self.optimize(&request.orders, request.algorithm())
    }

    /// Assesses `orders` against the configured rake capacity.
    pub fn rake_load(&self, orders: &[Order]) -> RakeLoad {
        RakeLoad::assess(orders, self.config.rake_capacity_tons)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            config: OptimizerConfig::default(),
            greedy: GreedyStrategy::new(),
            genetic: GeneticStrategy::default(),
            monte_carlo: MonteCarloStrategy::default(),
        }
    }
}

/// Optimizes `orders` with the strategy named by `selector` under default
/// settings. Absent or unknown selectors run greedy.
pub fn optimize(orders: &[Order], selector: Option<&str>) -> OptimizationResult {
    Optimizer::default().optimize_selector(orders, selector)
}
