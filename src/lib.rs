//! Rake formation order sequencing.
//!
//! Orders a set of shipment orders for loading onto a capacity-bounded
//! rake, trading lateness against wagon utilization. Three strategies
//! share one result envelope:
//!
//! - **Greedy**: earliest due date, heaviest load on ties. Deterministic.
//! - **Genetic-style**: best of 20 random permutations under a
//!   position-weighted due score.
//! - **Monte Carlo**: best of 50 random permutations under a tardiness
//!   proxy.
//!
//! Every strategy returns the suggested sequence, a fixed rationale and
//! a lower-is-better score. Scores are strategy-specific and must not be
//! compared across strategies.
//!
//! # Modules
//!
//! - **`model`**: `Order`, `Due`, `OptimizationResult`, `RakeLoad`
//! - **`scoring`**: per-strategy sequence scores
//! - **`dispatching`**: sequential priority-rule engine
//! - **`greedy`**, **`search`**: the strategies
//! - **`optimizer`**: facade, selector parsing, configuration
//! - **`validation`**: non-fatal input checks
//!
//! # Example
//!
//! ```
//! use rake_optim::model::Order;
//! use rake_optim::optimizer::{Algorithm, Optimizer, OptimizerConfig};
//!
//! let orders = vec![
//!     Order::new("A", 100.0, "5"),
//!     Order::new("B", 50.0, "2"),
//!     Order::new("C", 200.0, "2"),
//! ];
//!
//! let optimizer = Optimizer::new(OptimizerConfig::default().with_seed(42)).unwrap();
//! let greedy = optimizer.optimize(&orders, Algorithm::Greedy);
//! assert_eq!(greedy.suggested_ids(), vec!["C", "B", "A"]);
//!
//! let sampled = optimizer.optimize(&orders, Algorithm::MonteCarlo);
//! assert_eq!(sampled.suggested.len(), 3);
//! ```

pub mod dispatching;
pub mod error;
pub mod greedy;
pub mod model;
pub mod optimizer;
pub mod random;
pub mod scoring;
pub mod search;
pub mod validation;

pub use error::ConfigError;
