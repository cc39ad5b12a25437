//! Domain types for rake formation.
//!
//! - [`Order`]: a shipment request with tonnage and a [`Due`] signal
//! - [`OptimizationResult`]: the sequence, rationale and score returned by
//!   every strategy
//! - [`RakeLoad`]: tonnage against the rake's aggregate capacity
//! - [`OrderFilter`]: text/priority selection of candidate orders

mod filter;
#[cfg(feature = "serde")]
pub(crate) mod lenient;
mod order;
mod rake;
mod result;

pub use filter::OrderFilter;
pub use order::{Due, Order, Priority};
pub use rake::{RakeLoad, DEFAULT_RAKE_CAPACITY_TONS, UNDER_UTILIZATION_PERCENT};
pub use result::OptimizationResult;
