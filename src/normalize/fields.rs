//! Lenient readers for loosely-typed payload fields.
//!
//! Each reader accepts any JSON value and returns a typed result, falling
//! back to "absent" or zero for the wrong shape.

use serde_json::{Number, Value};

/// Whether a value would pass a plain truthiness check: `null`, `false`,
/// zero and the empty string do not.
pub(super) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display text of a JSON number. Integral floats drop their fraction, so
/// `1.0` reads `1`, and negative zero reads `0`.
pub(super) fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // f64 Display already drops a trailing ".0"
        Some(f) => (f + 0.0).to_string(),
        None => n.to_string(),
    }
}

/// A string field. Numbers are rendered as text; everything else is absent.
pub(super) fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// A string field that only counts as present when it is truthy: a
/// non-empty string, a non-zero number, or `true`.
pub(super) fn truthy_text(value: Option<&Value>) -> Option<String> {
    let value = value.filter(|v| is_truthy(v))?;
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(_) => Some("true".to_string()),
        _ => None,
    }
}

/// A strict string field: only JSON strings are accepted.
pub(super) fn string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// A finite number.
pub(super) fn number(value: Option<&Value>) -> Option<f64> {
    value
        .and_then(Value::as_f64)
        .filter(|f| f.is_finite())
        .map(|f| f + 0.0)
}

/// A non-negative count. Negative, fractional-negative, non-numeric and
/// missing values become 0; positive fractions are truncated.
pub(super) fn count(value: Option<&Value>) -> u64 {
    let Some(value) = value else {
        return 0;
    };
    if let Some(n) = value.as_u64() {
        return n;
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f.trunc() as u64,
        _ => 0,
    }
}

pub(super) fn array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value.and_then(Value::as_array)
}
