//! Loose value coercion
//!
//! Request inputs arrive as path segments, query values or arbitrary JSON.
//! These helpers turn them into numbers and display strings with the same
//! leniency clients of the service rely on.

use serde_json::Value;

/// Largest integer an `f64` represents exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse the leading integer of a string.
///
/// Leading whitespace and one sign are accepted, then decimal digits up to the
/// first non-digit: `"12abc"` is 12. Returns `None` when no digit follows.
pub fn parse_int(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: f64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce a whole string to a number.
///
/// Surrounding whitespace is ignored, an empty string is 0, `0x`/`0o`/`0b`
/// prefixes and `Infinity` are understood. Anything else must be a complete
/// decimal literal.
#[allow(clippy::cast_precision_loss)]
pub fn to_number(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
    }

    parse_decimal(s)
}

/// Parse a complete decimal literal such as `-12`, `1.5` or `2e3`
fn parse_decimal(s: &str) -> Option<f64> {
    // f64::from_str also accepts "inf" and "NaN", which are not numbers here
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    s.parse().ok()
}

/// Numeric value of a JSON body field.
///
/// Numbers are taken as-is, strings must hold a complete decimal number
/// (surrounding whitespace allowed, no `0x` style prefixes).
/// Everything else (booleans, `null`, arrays, objects) is rejected.
pub fn operand(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(s.trim()).filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Convert a computed number into a JSON value.
///
/// Integral results become JSON integers, non-finite results become `null`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn number_value(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // -0.0 serializes as 0
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

/// Display form of a JSON value, as used when joining array elements.
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(u)) => u.to_string(),
            _ => n.as_f64().map(format_float).unwrap_or_default(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(to_js_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip form of a float, switching to exponent notation
/// (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`
#[allow(clippy::float_cmp)]
fn format_float(f: f64) -> String {
    let magnitude = f.abs();
    if !f.is_finite() || f == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int("42"), Some(42.0));
        assert_eq!(parse_int("  -7"), Some(-7.0));
        assert_eq!(parse_int("+3"), Some(3.0));
        assert_eq!(parse_int("12abc"), Some(12.0));
        assert_eq!(parse_int("3.9"), Some(3.0));
    }

    #[test]
    fn test_parse_int_rejects_non_numeric() {
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("- 3"), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(" 7 "), Some(7.0));
        assert_eq!(to_number("1.5"), Some(1.5));
        assert_eq!(to_number("-1e3"), Some(-1000.0));
        assert_eq!(to_number("0x1F"), Some(31.0));
        assert_eq!(to_number("0b101"), Some(5.0));
        assert_eq!(to_number(""), Some(0.0));
        assert_eq!(to_number("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn test_to_number_rejects_partial_and_words() {
        assert_eq!(to_number("12abc"), None);
        assert_eq!(to_number("inf"), None);
        assert_eq!(to_number("NaN"), None);
        assert_eq!(to_number("1e"), None);
        assert_eq!(to_number("0xZZ"), None);
    }

    #[test]
    fn test_operand() {
        assert_eq!(operand(&json!(4)), Some(4.0));
        assert_eq!(operand(&json!(-2.5)), Some(-2.5));
        assert_eq!(operand(&json!("10")), Some(10.0));
        assert_eq!(operand(&json!("ten")), None);
        assert_eq!(operand(&json!("")), None);
        assert_eq!(operand(&json!(true)), None);
        assert_eq!(operand(&json!(null)), None);
        assert_eq!(operand(&json!([1])), None);
    }

    #[test]
    fn test_operand_requires_decimal_strings() {
        assert_eq!(operand(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(operand(&json!("1e3")), Some(1000.0));
        assert_eq!(operand(&json!("0x10")), None);
        assert_eq!(operand(&json!("0b1")), None);
        assert_eq!(operand(&json!("Infinity")), None);
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(12.0), json!(12));
        assert_eq!(number_value(-0.0), json!(0));
        assert_eq!(number_value(2.5), json!(2.5));
        assert_eq!(number_value(f64::INFINITY), Value::Null);
        assert_eq!(number_value(f64::NAN), Value::Null);
    }

    #[test]
    fn test_to_js_string() {
        assert_eq!(to_js_string(&json!(null)), "");
        assert_eq!(to_js_string(&json!(3)), "3");
        assert_eq!(to_js_string(&json!(1.5)), "1.5");
        assert_eq!(to_js_string(&json!(false)), "false");
        assert_eq!(to_js_string(&json!([1, [2, 3]])), "1,2,3");
        assert_eq!(to_js_string(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn test_to_js_string_exponent_notation() {
        assert_eq!(to_js_string(&json!(1e21)), "1e+21");
        assert_eq!(to_js_string(&json!(1.5e22)), "1.5e+22");
        assert_eq!(to_js_string(&json!(1e-7)), "1e-7");
        assert_eq!(to_js_string(&json!(0.000_001)), "0.000001");
        assert_eq!(to_js_string(&json!(-2.5e-9)), "-2.5e-9");
    }
}
