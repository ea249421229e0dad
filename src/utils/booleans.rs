//! Boolean utilities

use serde_json::Value;

/// `null`, `false`, `0`, `""` and an absent value are falsy
pub fn truthiness(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

pub fn negate(value: Option<&Value>) -> bool {
    !truthiness(value)
}

/// True only for odd integers, negative ones included
#[allow(clippy::float_cmp)]
pub fn is_odd(number: f64) -> bool {
    number.is_finite() && number.rem_euclid(2.0) == 1.0
}

pub fn starts_with(string: &str, character: &str) -> bool {
    string.starts_with(character)
}
