//! Order selection for rake building.

use super::{Order, Priority};

/// Chooses which orders are offered for a rake.
///
/// The text query matches id, customer or material case-insensitively.
/// An empty query matches everything.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    query: String,
    priority: Option<Priority>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = query.as_ref().to_lowercase();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        let text = self.query.is_empty()
            || [&order.id, &order.customer, &order.material]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query));

        let priority = match self.priority {
            Some(p) => order.priority == Some(p),
            None => true,
        };

        text && priority
    }

    /// Matching orders not already loaded on the rake (by id).
    pub fn available<'a>(&self, orders: &'a [Order], loaded: &[Order]) -> Vec<&'a Order> {
        orders
            .iter()
            .filter(|o| !loaded.iter().any(|l| l.id == o.id))
            .filter(|o| self.matches(o))
            .collect()
    }
}
