//! Forgiving field deserializers for the save document.
//!
//! Save files come from many game versions and converters. A field that is
//! supposed to be numeric may arrive as a number, a numeric string, `null`,
//! or a `[value, extra]` array (the game stores some counters that way).
//! None of that is a reason to reject the document: anything that does not
//! read as a non-negative number becomes `0`, and map keys that do not parse
//! as the expected id type are dropped.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// Reads a JSON value as a non-negative integer, defaulting to 0.
pub fn coerce_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(float_to_u64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_to_u64))
                .unwrap_or(0)
        }
        // First element is the count; the rest is per-item detail.
        Value::Array(items) => items.first().map(coerce_u64).unwrap_or(0),
        _ => 0,
    }
}

fn float_to_u64(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0).then(|| f.trunc() as u64)
}

/// `true` and `"true"` are true; everything else is false.
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Renders a scalar as an id string. Objects, arrays and null have no id.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_u64(&value))
}

pub fn numbers<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(coerce_u64).collect(),
        _ => Vec::new(),
    })
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_flag(&value))
}

pub fn flags<'de, D>(deserializer: D) -> Result<Vec<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(coerce_flag).collect(),
        _ => Vec::new(),
    })
}

/// Optional text: `null`, empty strings and non-strings read as absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Id → quantity map. Keys that do not parse as `K` are skipped.
pub fn counts<'de, D, K>(deserializer: D) -> Result<BTreeMap<K, u64>, D::Error>
where
    D: Deserializer<'de>,
    K: FromStr + Ord,
{
    let value = Value::deserialize(deserializer)?;
    let mut out = BTreeMap::new();
    if let Value::Object(map) = value {
        for (key, v) in &map {
            if let Ok(id) = key.trim().parse::<K>() {
                out.insert(id, coerce_u64(v));
            }
        }
    }
    Ok(out)
}

/// Set of ids given as numbers or strings. Entries that do not parse are skipped.
pub fn ids<'de, D, K>(deserializer: D) -> Result<BTreeSet<K>, D::Error>
where
    D: Deserializer<'de>,
    K: FromStr + Ord,
{
    let value = Value::deserialize(deserializer)?;
    let mut out = BTreeSet::new();
    if let Value::Array(items) = value {
        for item in &items {
            if let Some(id) = scalar_text(item).and_then(|s| s.parse::<K>().ok()) {
                out.insert(id);
            }
        }
    }
    Ok(out)
}

/// Bundle id → per-slot completion flags.
pub fn slot_flags<'de, D>(deserializer: D) -> Result<BTreeMap<u32, Vec<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let mut out = BTreeMap::new();
    if let Value::Object(map) = value {
        for (key, v) in &map {
            let Ok(id) = key.trim().parse::<u32>() else {
                continue;
            };
            let slots = match v {
                Value::Array(items) => items.iter().map(coerce_flag).collect(),
                _ => Vec::new(),
            };
            out.insert(id, slots);
        }
    }
    Ok(out)
}
