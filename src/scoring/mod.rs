//! Sequence scoring rules.
//!
//! A [`SequenceScore`] turns a candidate loading sequence into a single
//! lower-is-better number. Each strategy owns its rule:
//!
//! | Rule                 | Strategy      | Term at position `i`         |
//! |----------------------|---------------|------------------------------|
//! | [`ArrivalScore`]     | greedy        | `due + i`                    |
//! | [`WeightedDueScore`] | genetic-style | `due * (i + 1)`              |
//! | [`TardinessScore`]   | Monte Carlo   | `max(0, (i + 1) - due)`      |
//!
//! Values from different rules are not comparable.

mod rules;
mod types;

pub use rules::{ArrivalScore, TardinessScore, WeightedDueScore};
pub use types::SequenceScore;
