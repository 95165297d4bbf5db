use serde_json::Value;

/// Coerce a loosely-typed field value to a finite `f64`.
///
/// Returns the coerced value and whether a parse warning was raised.
/// Normalization never fails: anything unparseable becomes `0.0` with the
/// warning flag set, while a missing or empty field is an ordinary `0.0`.
///
/// Handles formats like:
/// - JSON number `120.5` -> `120.5`
/// - `"120.5"` -> `120.5`
/// - `"  7 "` -> `7.0` (surrounding whitespace)
/// - `"0,030"` -> `0.030` (decimal comma)
/// - `"n/a"` -> `0.0` with warning
pub fn coerce_numeric(value: Option<&Value>) -> (f64, bool) {
    match value {
        None | Some(Value::Null) => (0.0, false),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() => (v, false),
            _ => (0.0, true),
        },
        Some(Value::String(s)) => {
            if s.trim().is_empty() {
                return (0.0, false);
            }
            match parse_number(s) {
                Some(v) => (v, false),
                None => (0.0, true),
            }
        }
        Some(_) => (0.0, true),
    }
}

/// Parse a decimal value, handling comma notation.
fn parse_number(s: &str) -> Option<f64> {
    let normalized = s.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}
