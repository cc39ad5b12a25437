//! Wire request for the optimize boundary.

use super::Algorithm;
use crate::model::{lenient, Order};
use serde::Deserialize;

/// `{ orders, algorithm }` as sent by a planner client.
///
/// Decoding is forgiving: a missing or non-array `orders` is empty, and a
/// missing or non-string `algorithm` selects greedy.
///
/// ```
/// use rake_optim::optimizer::{Algorithm, OptimizeRequest};
///
/// let req: OptimizeRequest = serde_json::from_str(r#"{"orders": "nope"}"#).unwrap();
/// assert!(req.orders.is_empty());
/// assert_eq!(req.algorithm(), Algorithm::Greedy);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default, deserialize_with = "lenient::orders")]
    pub orders: Vec<Order>,

    /// Raw selector, kept as sent.
    #[serde(default, deserialize_with = "lenient::selector")]
    pub algorithm: Option<String>,
}

impl OptimizeRequest {
    pub fn new(orders: Vec<Order>, algorithm: Algorithm) -> Self {
        Self {
            orders,
            algorithm: Some(algorithm.selector().to_string()),
        }
    }

    /// The resolved strategy.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from_selector(self.algorithm.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> OptimizeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_request() {
        let req = parse(
            r#"{"orders":[{"id":"A","customer":"C","material":"M","tons":100,"due":"5"}],
                "algorithm":"monteCarlo"}"#,
        );
        assert_eq!(req.orders.len(), 1);
        assert_eq!(req.orders[0].due_days(), 5);
        assert_eq!(req.algorithm(), Algorithm::MonteCarlo);
    }

    #[test]
    fn test_missing_fields() {
        let req = parse("{}");
        assert!(req.orders.is_empty());
        assert_eq!(req.algorithm, None);
        assert_eq!(req.algorithm(), Algorithm::Greedy);
    }

    #[test]
    fn test_non_sequence_orders() {
        for body in [
            r#"{"orders":null}"#,
            r#"{"orders":42}"#,
            r#"{"orders":{"id":"A"}}"#,
        ] {
            assert!(parse(body).orders.is_empty(), "{body}");
        }
    }

    #[test]
    fn test_null_customer_keeps_every_order() {
        let req = parse(
            r#"{"orders":[{"id":"A","customer":null,"tons":100,"due":"5"},
                          {"id":"B","tons":50,"due":"2"}]}"#,
        );
        assert_eq!(req.orders.len(), 2);
        assert!(req.orders[0].customer.is_empty());
        assert_eq!(req.orders[0].tons, 100.0);
    }

    #[test]
    fn test_numeric_id_becomes_text() {
        let req = parse(
            r#"{"orders":[{"id":1001,"tons":30,"due":"1"},{"id":"B","tons":50,"due":"2"}]}"#,
        );
        let ids: Vec<&str> = req.orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1001", "B"]);
    }

    #[test]
    fn test_mixed_element_list_keeps_orders() {
        let req = parse(
            r#"{"orders":[{"id":"A","tons":"heavy","due":[1]},42,"B",null,
                          {"id":"C","material":7.5,"priority":3}]}"#,
        );
        let ids: Vec<&str> = req.orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
        assert_eq!(req.orders[0].tons, 0.0);
        assert_eq!(req.orders[0].due_days(), 0);
        assert_eq!(req.orders[1].material, "7.5");
        assert_eq!(req.orders[1].priority, None);
    }

    #[test]
    fn test_malformed_fields_reach_optimizer() {
        let req = parse(
            r#"{"orders":[{"id":"A","customer":null,"tons":100,"due":"5"},
                          {"id":"B","tons":50,"due":"2"}],"algorithm":"greedy"}"#,
        );
        let result = crate::optimizer::Optimizer::default().handle(&req);
        assert_eq!(result.suggested_ids(), vec!["B", "A"]);
    }

    #[test]
    fn test_non_string_algorithm() {
        let req = parse(r#"{"orders":[],"algorithm":7}"#);
        assert_eq!(req.algorithm, None);
        assert_eq!(req.algorithm(), Algorithm::Greedy);
    }

    #[test]
    fn test_unknown_algorithm_kept_raw() {
        let req = parse(r#"{"algorithm":"bogus"}"#);
        assert_eq!(req.algorithm.as_deref(), Some("bogus"));
        assert_eq!(req.algorithm(), Algorithm::Greedy);
    }

    #[test]
    fn test_new_sets_selector() {
        let req = OptimizeRequest::new(Vec::new(), Algorithm::Genetic);
        assert_eq!(req.algorithm.as_deref(), Some("ga"));
    }
}
