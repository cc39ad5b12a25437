//! Forgiving field decoders for request payloads.
//!
//! Malformed fields decode to safe defaults instead of failing the whole
//! document.

use super::{Due, Order, Priority};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn ok(self) -> Option<T> {
        match self {
            Lenient::Value(v) => Some(v),
            Lenient::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Tons {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Tonnage as a number or numeric text; anything else is `0`.
pub(crate) fn tons<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(match Tons::deserialize(d)? {
        Tons::Number(v) => v,
        Tons::Text(s) => s.trim().parse().unwrap_or(0.0),
        Tons::Other(_) => 0.0,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Other(IgnoredAny),
}

impl Text {
    fn into_string(self) -> Option<String> {
        match self {
            Text::Str(s) => Some(s),
            Text::Int(v) => Some(v.to_string()),
            Text::Uint(v) => Some(v.to_string()),
            Text::Float(v) => Some(v.to_string()),
            Text::Other(_) => None,
        }
    }
}

/// A label as text; numbers become their decimal form, anything else `""`.
pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Text::deserialize(d)?.into_string().unwrap_or_default())
}

/// Like [`text`], but `None` where there is no usable value.
pub(crate) fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Text::deserialize(d)?.into_string())
}

/// A due signal from any scalar; anything else is due now.
pub(crate) fn due<'de, D: Deserializer<'de>>(d: D) -> Result<Due, D::Error> {
    Ok(Lenient::<Due>::deserialize(d)?.ok().unwrap_or_default())
}

/// A known priority label, or `None`.
pub(crate) fn priority<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Priority>, D::Error> {
    Ok(Lenient::<Priority>::deserialize(d)?.ok())
}

/// An order list; a non-sequence value decodes as empty.
///
/// Elements are decoded one by one. Fields inside an object fall back to
/// their defaults; an element that is not an order object is skipped.
pub(crate) fn orders<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Order>, D::Error> {
    Ok(Lenient::<Vec<Lenient<Order>>>::deserialize(d)?
        .ok()
        .map(|items| items.into_iter().filter_map(Lenient::ok).collect())
        .unwrap_or_default())
}

/// A selector string; a non-string value decodes as absent.
pub(crate) fn selector<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Lenient::<String>::deserialize(d)?.ok())
}
