//! Shipment orders and their due signal.

use std::fmt;

/// Days until an order falls due.
///
/// Upstream systems send the due signal as free text (`"3"`, `"5d"`,
/// `"2024-11-15"`). It is interpreted as an ordinal days-until-due
/// integer, never as a calendar date: the leading integer prefix is taken
/// and anything unparseable counts as `0`, i.e. due now.
///
/// The raw text is kept so the order serializes back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Due {
    raw: String,
    days: i64,
}

impl Due {
    /// Parses a due signal. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use rake_optim::model::Due;
    ///
    /// assert_eq!(Due::parse("5").days(), 5);
    /// assert_eq!(Due::parse("5d").days(), 5);
    /// assert_eq!(Due::parse("soon").days(), 0);
    /// ```
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let days = parse_leading_int(&raw).unwrap_or(0);
        Self { raw, days }
    }

    /// Builds a due signal from a day count.
    pub fn days_from_now(days: i64) -> Self {
        Self {
            raw: days.to_string(),
            days,
        }
    }

    /// Days until due. Unparseable signals yield `0`.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// The text this value was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the raw text carried a readable integer prefix.
    pub fn is_parsed(&self) -> bool {
        parse_leading_int(&self.raw).is_some()
    }
}

impl fmt::Display for Due {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Due {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<i64> for Due {
    fn from(days: i64) -> Self {
        Self::days_from_now(days)
    }
}

/// Reads the integer prefix of `s`.
///
/// Skips leading whitespace, accepts one sign, then the longest run of
/// decimal digits. A `0x`/`0X` prefix switches to hexadecimal. Returns
/// `None` when no digit follows. Magnitudes beyond `i64` saturate.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen = true;
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
    }

    if !seen {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

/// Customer-assigned urgency label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A shipment request waiting to be placed on a rake.
///
/// Orders are immutable inputs: optimization only reorders them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Stable unique identifier.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::model::lenient::text")
    )]
    pub id: String,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::model::lenient::text")
    )]
    pub customer: String,

    /// Commodity being shipped.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::model::lenient::text")
    )]
    pub material: String,

    /// Quantity in tons; the unit of rake capacity consumption.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::model::lenient::tons")
    )]
    pub tons: f64,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::model::lenient::due")
    )]
    pub due: Due,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "crate::model::lenient::priority"
        )
    )]
    pub priority: Option<Priority>,

    /// Loading point the order ships from.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "crate::model::lenient::optional_text"
        )
    )]
    pub origin: Option<String>,
}

impl Order {
    pub fn new(id: impl Into<String>, tons: f64, due: impl Into<Due>) -> Self {
        Self {
            id: id.into(),
            tons,
            due: due.into(),
            ..Self::default()
        }
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Days until due (`0` when the signal is unreadable).
    pub fn due_days(&self) -> i64 {
        self.due.days()
    }
}

#[cfg(feature = "serde")]
mod due_serde {
    use super::Due;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Due {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.raw)
        }
    }

    struct DueVisitor;

    impl<'de> Visitor<'de> for DueVisitor {
        type Value = Due;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a due signal")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Due, E> {
            Ok(Due::parse(v))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Due, E> {
            Ok(Due::parse(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Due, E> {
            Ok(Due::parse(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Due, E> {
            Ok(Due::parse(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Due, E> {
            Ok(Due::parse(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Due, E> {
            Ok(Due::parse(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Due, E> {
            Ok(Due::default())
        }

        fn visit_none<E: de::Error>(self) -> Result<Due, E> {
            Ok(Due::default())
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Due, D::Error> {
            d.deserialize_any(DueVisitor)
        }
    }

    impl<'de> Deserialize<'de> for Due {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(DueVisitor)
        }
    }
}
