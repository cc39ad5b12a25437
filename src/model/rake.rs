//! Rake capacity assessment.
//!
//! The engine never drops orders to fit a rake. Callers use [`RakeLoad`]
//! to report overflow or under-use of the single aggregate tonnage limit.

use super::Order;

/// Default rake capacity in tons.
pub const DEFAULT_RAKE_CAPACITY_TONS: f64 = 2000.0;

/// Utilization below this percentage is flagged as under-used.
pub const UNDER_UTILIZATION_PERCENT: f64 = 70.0;

/// Aggregate load of a set of orders against one rake.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RakeLoad {
    pub total_tons: f64,
    pub capacity_tons: f64,

    /// Load as a percentage of capacity, capped at 100.
    pub utilization_percent: f64,

    pub over_capacity: bool,
    pub under_utilized: bool,
}

impl RakeLoad {
    /// Assesses `orders` against a rake of `capacity_tons`.
    ///
    /// A non-positive capacity reports 0% utilization and flags any load
    /// as overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use rake_optim::model::{Order, RakeLoad};
    ///
    /// let orders = vec![Order::new("A", 1500.0, "2"), Order::new("B", 700.0, "3")];
    /// let load = RakeLoad::assess(&orders, 2000.0);
    /// assert!(load.over_capacity);
    /// assert_eq!(load.utilization_percent, 100.0);
    /// ```
    pub fn assess(orders: &[Order], capacity_tons: f64) -> Self {
        let total_tons: f64 = orders.iter().map(|o| o.tons).sum();

        let utilization_percent = if capacity_tons > 0.0 {
            (total_tons / capacity_tons * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            total_tons,
            capacity_tons,
            utilization_percent,
            over_capacity: total_tons > capacity_tons,
            under_utilized: utilization_percent < UNDER_UTILIZATION_PERCENT,
        }
    }

    /// Tons still free on the rake (zero once full).
    pub fn remaining_tons(&self) -> f64 {
        (self.capacity_tons - self.total_tons).max(0.0)
    }
}
