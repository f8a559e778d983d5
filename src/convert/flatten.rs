//! Flattening a JSON object into ordered key and value sequences

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Keys of the object, sorted ascending by byte value
///
/// This sort is the only ordering guarantee in the pipeline; the header
/// line and the data row both derive from it.
pub fn sorted_keys(object: &JsonObject) -> Vec<String> {
    let mut keys: Vec<String> = object.keys().cloned().collect();
    keys.sort_unstable();
    keys
}

/// Flatten an object into sorted keys and positionally aligned values
pub fn flatten_object(object: &JsonObject) -> Result<(Vec<String>, Vec<String>)> {
    let keys = sorted_keys(object);

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        // Both sequences derive from the same map, so a miss here is an
        // invariant violation rather than a recoverable condition.
        let value = object.get(key).ok_or_else(|| Error::key_not_found(key))?;
        values.push(stringify_value(value)?);
    }

    Ok((keys, values))
}

/// Canonical CSV-cell text for a single JSON value
///
/// Strings pass through unmodified, booleans become their literals, and
/// numbers print as fixed-point decimals with six fractional digits (no
/// exponent, trailing zeros kept). Every other shape falls back to its
/// compact JSON encoding.
pub fn stringify_value(value: &JsonValue) -> Result<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) => Ok(format!("{f:.6}")),
            None => encode_compact(value),
        },
        _ => encode_compact(value),
    }
}

/// Compact JSON encoding with surrounding whitespace trimmed
fn encode_compact(value: &JsonValue) -> Result<String> {
    let encoded = serde_json::to_string(value)
        .map_err(|e| Error::encoding(format!("JSON re-encoding failed: {e}")))?;
    Ok(encoded.trim().to_string())
}
