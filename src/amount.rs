//! Payment amount parsing.
//!
//! The amount field is read the way a browser's `parseFloat` reads it: leading
//! whitespace is skipped, the longest numeric prefix is taken, and whatever
//! follows is ignored. `"12abc"` is 12, `"abc"` is not a number at all.

use crate::error::FieldError;

/// Parses the longest leading decimal literal in `input`.
///
/// Accepts an optional sign, digits with an optional fraction and exponent,
/// or `Infinity`. Returns `None` when no number starts the string.
///
/// # Example
///
/// ```
/// use payform::amount::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("10.50"), Some(10.5));
/// assert_eq!(parse_float_prefix("  3.5kg"), Some(3.5));
/// assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
/// assert_eq!(parse_float_prefix("abc"), None);
/// ```
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Parses an amount and requires it to be positive.
///
/// # Example
///
/// ```
/// use payform::amount::parse_amount;
///
/// assert_eq!(parse_amount("10.50"), Ok(10.5));
/// assert!(parse_amount("0").is_err());
/// assert!(parse_amount("-5").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<f64, FieldError> {
    match parse_float_prefix(input) {
        Some(value) if !value.is_nan() && value > 0.0 => Ok(value),
        _ => Err(FieldError::InvalidAmount),
    }
}

/// Validates the amount field.
pub fn validate_amount(input: &str) -> Result<(), FieldError> {
    parse_amount(input).map(|_| ())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float_prefix("0"), Some(0.0));
        assert_eq!(parse_float_prefix("42"), Some(42.0));
        assert_eq!(parse_float_prefix("10.50"), Some(10.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("-5"), Some(-5.0));
        assert_eq!(parse_float_prefix("+7"), Some(7.0));
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_float_prefix("12abc"), Some(12.0));
        assert_eq!(parse_float_prefix("1.2.3"), Some(1.2));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("1e+"), Some(1.0));
        assert_eq!(parse_float_prefix("2E-1x"), Some(0.2));
        assert_eq!(parse_float_prefix("0x10"), Some(0.0));
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_float_prefix("  \t\n8"), Some(8.0));
        assert_eq!(parse_float_prefix("\u{feff}9"), Some(9.0));
    }

    #[test]
    fn test_not_a_number() {
        for input in ["", " ", "abc", ".", "-", "+", "-.", ".e5", "e5", "$5", "- 5"] {
            assert_eq!(parse_float_prefix(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("-Infinityx"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("infinity"), None);
        assert_eq!(parse_float_prefix("inf"), None);
        assert_eq!(parse_float_prefix("NaN"), None);
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("10.50").is_ok());
        assert!(validate_amount("0.01").is_ok());
        assert!(validate_amount("5abc").is_ok());
        assert_eq!(validate_amount("0"), Err(FieldError::InvalidAmount));
        assert_eq!(validate_amount("0.00"), Err(FieldError::InvalidAmount));
        assert_eq!(validate_amount("-5"), Err(FieldError::InvalidAmount));
        assert_eq!(validate_amount("abc"), Err(FieldError::InvalidAmount));
        assert_eq!(validate_amount(""), Err(FieldError::InvalidAmount));
    }
}
