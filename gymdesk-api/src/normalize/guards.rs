//! Primitive type-narrowing guards
//!
//! Safe extraction of typed values from untrusted JSON. Every guard is a
//! total, pure function: any input maps to either a narrowed value or
//! absence, never a panic.

use serde_json::Value;

/// True iff `v` is a JSON object.
///
/// Unlike `typeof` in dynamic languages, `Value::Object` already excludes
/// arrays, so callers need no separate array pre-check.
pub fn is_record(v: &Value) -> bool {
    v.is_object()
}

/// Extract a non-empty trimmed string.
///
/// Empty and whitespace-only strings are treated as absent.
pub fn as_trimmed_str(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}

/// Extract a finite number.
///
/// JSON numbers pass through; strings are accepted when they parse to a
/// finite float (legacy backends stringify numeric fields). NaN, infinities,
/// and non-numeric strings are absent.
pub fn as_finite_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Extract a boolean with no truthy coercion.
pub fn as_bool_strict(v: &Value) -> Option<bool> {
    v.as_bool()
}

/// Extract an array.
pub fn as_array(v: &Value) -> Option<&Vec<Value>> {
    match v {
        Value::Array(items) => Some(items),
        _ => None,
    }
}
