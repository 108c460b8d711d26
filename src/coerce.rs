//! Lenient scalar coercion for untrusted model output.

use serde_json::Value;

/// Coerces an arbitrary JSON value to a boolean.
///
/// True for boolean `true`, any nonzero number, and strings whose trimmed,
/// lowercased form is one of `1`, `true`, `t`, `yes`, `y`, `sim`. Everything
/// else is false, including null, zero, empty and unrecognized strings.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "1" | "true" | "t" | "yes" | "y" | "sim"
        ),
        _ => false,
    }
}

/// Coerces an optional JSON value to a boolean, using `default` when the
/// value is absent. A present null is coerced (to false), not defaulted.
pub fn to_bool_or(value: Option<&Value>, default: bool) -> bool {
    value.map(to_bool).unwrap_or(default)
}

/// Renders a JSON scalar as a trimmed string. Null, arrays and objects
/// yield `None`.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
