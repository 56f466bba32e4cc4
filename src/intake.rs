//! Intake coercion for victim and donor submissions.
//!
//! Client payloads are loosely typed: numbers arrive as strings, flags as
//! `"No"`/`"yes"`/`0`, fields go missing. Everything is coerced here into the
//! well-typed records the matcher expects, so that nothing downstream has a
//! failure mode for bad input.

use serde_json::Value;

/// Urgency label used when a submission omits one
pub const DEFAULT_URGENCY: &str = "Low";

/// Tokens (compared lowercase) meaning "does not own a home"
const NO_HOME_TOKENS: [&str; 4] = ["no", "0", "false", "f"];

/// Coerce a JSON value into an integer, falling back to `default`.
///
/// Floats truncate toward zero, booleans count as 0/1 and strings are
/// parsed as base-10 after trimming surrounding whitespace. Strings may
/// group digits with single underscores (`"1_000"`).
pub fn coerce_int(value: &Value, default: i64) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() => f.trunc() as i64,
                    _ => default,
                }
            }
        }
        Value::Bool(b) => i64::from(*b),
        Value::String(s) => parse_int_text(s.trim()).unwrap_or(default),
        Value::Null | Value::Array(_) | Value::Object(_) => default,
    }
}

/// Parse a signed base-10 integer, allowing single underscores between digits
fn parse_int_text(text: &str) -> Option<i64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.starts_with(['+', '-']) {
        return None;
    }

    if !digits.contains('_') {
        return format!("{}{}", sign, digits).parse().ok();
    }

    let separators_ok = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !separators_ok {
        return None;
    }

    format!("{}{}", sign, digits.replace('_', "")).parse().ok()
}

/// Same as [`coerce_int`] for an optional field, where absence means `default`
pub fn coerce_optional_int(value: Option<&Value>, default: i64) -> i64 {
    value.map_or(default, |v| coerce_int(v, default))
}

/// Derive the has-home flag from whatever the client sent.
///
/// Only the literal tokens `no`, `0`, `false` and `f` (any casing) mean
/// false; every other value, including null, means true. A missing field is
/// read as `"No"`.
pub fn coerce_has_home(value: Option<&Value>) -> bool {
    let text = match value {
        None => return false,
        Some(Value::String(s)) => s.to_lowercase(),
        Some(Value::Null) => "none".to_string(),
        Some(other) => other.to_string().to_lowercase(),
    };

    !NO_HOME_TOKENS.contains(&text.as_str())
}

/// Coerce a free-text field; missing and null become the empty string
pub fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Coerce the urgency label, defaulting to `Low` when absent
pub fn coerce_urgency(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => DEFAULT_URGENCY.to_string(),
        other => coerce_text(other),
    }
}
