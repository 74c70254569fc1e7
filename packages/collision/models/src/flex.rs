//! Loose-field normalization.
//!
//! The upstream collision dataset is not consistently typed: numeric
//! counters and coordinates arrive as JSON numbers, numeric strings, empty
//! strings, `null`, or are missing entirely. Every component that sums or
//! compares these fields goes through this module instead of inspecting
//! types ad hoc. Absence of a usable number is a normal outcome, never an
//! error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces a raw JSON value into a number, or `None` when the value is
/// `null`, an empty string, or unparseable.
#[must_use]
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Serde adapter: deserializes a loosely-typed numeric field into
/// `Option<f64>` using [`number`]. Use with `#[serde(default,
/// deserialize_with = "flex::numeric")]`.
///
/// # Errors
///
/// Never fails on malformed values; only propagates transport-level
/// deserializer errors.
pub fn numeric<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number))
}

/// Serde adapter: deserializes an identifier that may arrive as a string
/// or a number into `Option<String>`. Empty strings and `null` become
/// `None` so a missing ID never forms its own distinct bucket.
///
/// # Errors
///
/// Never fails on malformed values; only propagates transport-level
/// deserializer errors.
pub fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
