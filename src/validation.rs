//! Input checks for order sets.
//!
//! The engine accepts any input and substitutes defaults for malformed
//! fields. These checks let a caller see what was substituted. Detects:
//! - Duplicate or empty order IDs
//! - Non-positive or non-finite tonnage
//! - Due signals without a readable integer

use crate::model::Order;
use std::collections::HashSet;

/// A finding about one order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderIssue {
    pub kind: OrderIssueKind,
    /// Position of the order in the input.
    pub index: usize,
    pub message: String,
}

/// Categories of order findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderIssueKind {
    DuplicateId,
    EmptyId,
    /// Tonnage is zero, negative, NaN or infinite.
    InvalidTons,
    /// Due text has no integer prefix; it is treated as due now.
    UnreadableDue,
}

impl OrderIssue {
    fn new(kind: OrderIssueKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Reports every issue in `orders`, in input order. Empty when clean.
pub fn validate_orders(orders: &[Order]) -> Vec<OrderIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, order) in orders.iter().enumerate() {
        if order.id.is_empty() {
            issues.push(OrderIssue::new(
                OrderIssueKind::EmptyId,
                index,
                format!("Order at position {index} has no ID"),
            ));
        } else if !seen.insert(order.id.as_str()) {
            issues.push(OrderIssue::new(
                OrderIssueKind::DuplicateId,
                index,
                format!("Duplicate order ID: {}", order.id),
            ));
        }

        if !order.tons.is_finite() || order.tons <= 0.0 {
            issues.push(OrderIssue::new(
                OrderIssueKind::InvalidTons,
                index,
                format!("Order '{}' has invalid tonnage {}", order.id, order.tons),
            ));
        }

        if !order.due.is_parsed() {
            issues.push(OrderIssue::new(
                OrderIssueKind::UnreadableDue,
                index,
                format!(
                    "Order '{}' has unreadable due '{}', treated as due now",
                    order.id,
                    order.due.raw()
                ),
            ));
        }
    }

    issues
}
