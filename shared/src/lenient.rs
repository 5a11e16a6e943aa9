//! Loose readers for numbers and text coming from outside the service
//!
//! Query strings, path segments, request bodies and files written by the older
//! JavaScript service do not always carry the types the record model expects.
//! These helpers read what can be read and report `None` for the rest.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read the integer at the start of `raw` the way JavaScript's `parseInt`
/// does: leading whitespace, an optional sign, then decimal digits (or hex
/// after `0x`). Anything after the digits is ignored.
///
/// Returns `None` when no digit follows, or when the value does not fit in
/// an `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(digits.len(), |(index, _)| index);
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Customer id held in a JSON value.
///
/// Integral numbers and strings holding a whole integer are accepted.
/// Fractions, booleans, objects and non-numeric strings are not ids.
pub fn id_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Text field held in a JSON value. `null`, arrays and objects carry no text;
/// numbers and booleans keep their JSON spelling.
pub fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `deserialize_with` adapter for optional id fields
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value))
}

/// `deserialize_with` adapter for optional text fields
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value))
}
