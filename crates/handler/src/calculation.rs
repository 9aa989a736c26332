use crate::error::HandlerError;

/// Raise `base` to `exponent` with floating point semantics.
///
/// Both inputs are coerced integers. Zero raised to a negative power is a
/// domain error and a result which overflows `f64` is a range error.
pub fn power(base: f64, exponent: f64) -> Result<f64, HandlerError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(HandlerError::Domain { base, exponent });
    }

    let result: f64 = base.powf(exponent);

    if result.is_finite() {
        Ok(result)
    } else {
        Err(HandlerError::Range { base, exponent })
    }
}

/// Text form of a result, used as the record key.
///
/// Always reads as a float: integral values keep a trailing `.0`, and very
/// large or very small magnitudes switch to scientific notation with a
/// signed, two digit minimum exponent (`1e+16`, `1e-05`).
pub fn result_text(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude: f64 = value.abs();

    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted: String = format!("{value:e}");

        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };

                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => formatted,
        };
    }

    let formatted: String = value.to_string();

    if formatted.contains('.') {
        formatted
    } else {
        format!("{formatted}.0")
    }
}
