use crate::error::HandlerError;
use serde_json::Value;

pub const BASE: &str = "base";
pub const EXPONENT: &str = "exponent";

/// Coerce an untyped input into an integer, returned as the `f64` the power
/// is computed with.
///
/// Integers pass through at any size, floats truncate toward zero, booleans
/// become `1` or `0`, and strings must be an optionally signed run of ASCII
/// digits (single `_` separators allowed between digits) with surrounding
/// whitespace ignored. An integer too large for a finite `f64` is rejected,
/// as is anything else.
pub fn coerce_integer(field: &'static str, value: &Value) -> Result<f64, HandlerError> {
    let invalid = |reason: String| HandlerError::InvalidInteger { field, reason };

    let integer: f64 = match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                integer as f64
            } else if let Some(integer) = number.as_u64() {
                integer as f64
            } else {
                number
                    .as_f64()
                    .map(f64::trunc)
                    .ok_or_else(|| invalid(format!("{number} is not a number")))?
            }
        }
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::String(text) => {
            let digits: String = integer_literal(text)
                .ok_or_else(|| invalid(format!("invalid integer literal '{text}'")))?;

            // Correctly rounded; only overflows to infinity
            digits
                .parse::<f64>()
                .map_err(|err| invalid(format!("invalid integer literal '{text}': {err}")))?
        }
        Value::Null => return Err(invalid("value is null".to_string())),
        Value::Array(_) => {
            return Err(invalid("expected a number or a string, got an array".to_string()));
        }
        Value::Object(_) => {
            return Err(invalid("expected a number or a string, got an object".to_string()));
        }
    };

    if !integer.is_finite() {
        return Err(invalid(format!("{value} is too large to convert to float")));
    }

    // Integers have no negative zero
    Ok(integer + 0.0)
}

/// Validates an integer literal and strips its separators and whitespace.
fn integer_literal(text: &str) -> Option<String> {
    let trimmed: &str = text.trim();
    let digits: &str = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);

    // Underscores may only sit between two digits
    let well_formed: bool = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');

    well_formed.then(|| trimmed.replace('_', ""))
}
