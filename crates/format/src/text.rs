use itertools::Itertools;
use serde_json::Value;

/// Text for a scalar value. Null, sequences and mappings have none.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Default display text for a resolved value: scalars as-is, sequences of
/// scalars joined with ", ", everything else "".
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Array(_) => join_keywords(value, crate::DEFAULT_SEPARATOR),
        other => scalar_text(other).unwrap_or_default(),
    }
}

/// Joins a keyword list, skipping blank and non-scalar entries. A single
/// string is returned unchanged.
pub fn join_keywords(value: &Value, separator: &str) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(scalar_text)
            .filter(|k| !k.trim().is_empty())
            .join(separator),
        other => scalar_text(other).unwrap_or_default(),
    }
}
