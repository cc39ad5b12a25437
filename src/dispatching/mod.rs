//! Priority rule dispatching for orders.
//!
//! Orders are ranked by a chain of [`PriorityRule`]s evaluated
//! sequentially: a later rule is consulted only when every earlier rule
//! ties. Remaining ties keep input order.
//!
//! # Built-in rules
//!
//! - [`EarliestDue`]: smaller days-until-due first (EDD)
//! - [`HeaviestLoad`]: larger tonnage first
//!
//! # References
//!
//! Jackson (1955), EDD is optimal for maximum lateness on a single machine.
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
mod rules;

pub use engine::{PriorityRule, Rank, RuleEngine};
pub use rules::{EarliestDue, HeaviestLoad};
