//! Lenient serde helpers for API payloads whose fields may be null.
//!
//! The upstream API serializes absent aggregates as `null` and occasionally
//! as numeric strings. Views expect plain numbers, so these helpers collapse
//! anything non-numeric to zero instead of failing the whole record.

#[cfg(test)]
#[path = "de_test.rs"]
mod de_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a floating-point amount, mapping `null`, missing and garbage to `0.0`.
///
/// # Errors
///
/// Only fails when the underlying deserializer itself fails.
pub fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map_or(0.0, amount_value))
}

/// Decode a non-negative count, mapping `null`, missing and garbage to `0`.
///
/// # Errors
///
/// Only fails when the underlying deserializer itself fails.
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map_or(0, count_value))
}

/// Decode a nested object, mapping `null` to its `Default`.
///
/// # Errors
///
/// Fails when a present, non-null value does not match `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Interpret an arbitrary JSON value as an amount.
#[must_use]
pub fn amount_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Interpret an arbitrary JSON value as a count. Negative values clamp to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|v| v.is_finite() && *v > 0.0).map(|v| v as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}
