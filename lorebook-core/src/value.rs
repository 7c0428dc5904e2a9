//! Helpers over `serde_json::Value`
//!
//! All data exchanged with the host merge pipeline is JSON-shaped. These
//! helpers cover the two operations every converter leans on: extracting a
//! numeric magnitude from a loosely-typed field, and overlaying a patch
//! object onto an original without ever nulling a field.

use serde_json::Value;

/// Extract an integer magnitude from a measurement field.
///
/// Mirrors the host runtime's lenient number handling: numbers truncate
/// toward zero, strings parse an optional sign followed by leading digits.
/// Everything else - `null`, booleans, empty or non-numeric strings, nested
/// containers - yields `None`, which callers treat as "leave the field
/// unmodified".
pub fn magnitude(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64().map(|f| f.trunc() as i64)
            }
        }
        Value::String(s) => leading_int(s),
        _ => None,
    }
}

fn leading_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (sign, rest) = match t.strip_prefix('-') {
        Some(r) => (-1, r),
        None => (1, t.strip_prefix('+').unwrap_or(t)),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        None
    } else {
        digits.parse::<i64>().ok().map(|n| sign * n)
    }
}

/// Recursively overlay `patch` onto `target`, returning the merged value.
///
/// Object-vs-object merges key-wise; any other pairing is replaced by the
/// patch. Keys absent from the patch keep the target's value, so a patch
/// built from translation fields can never remove original data.
pub fn merge(target: &Value, patch: &Value) -> Value {
    match (target, patch) {
        (Value::Object(t), Value::Object(p)) => {
            let mut out = t.clone();
            for (key, patch_value) in p {
                let merged = match out.get(key) {
                    Some(existing) => merge(existing, patch_value),
                    None => patch_value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        _ => patch.clone(),
    }
}

/// The value as a non-empty string slice, if it is one.
pub fn non_empty_str(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}
