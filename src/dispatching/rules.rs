//! Built-in dispatching rules for orders.
//!
//! All rules return lower scores for higher priority orders.

use super::{PriorityRule, Rank};
use crate::model::Order;

/// Earliest Due Date.
///
/// Unreadable due signals score `0`, so those orders rank as most urgent.
#[derive(Debug, Clone, Copy)]
pub struct EarliestDue;

impl PriorityRule<Order> for EarliestDue {
    fn name(&self) -> &str {
        "EDD"
    }

    fn score(&self, order: &Order) -> Rank {
        Rank::Int(order.due_days())
    }
}

/// Heaviest load first, to front-load wagon utilization.
#[derive(Debug, Clone, Copy)]
pub struct HeaviestLoad;

impl PriorityRule<Order> for HeaviestLoad {
    fn name(&self) -> &str {
        "HEAVIEST"
    }

    fn score(&self, order: &Order) -> Rank {
        Rank::Float(-order.tons)
    }
}
