//! Keystroke formatters for the payment form fields.
//!
//! Each formatter takes whatever is currently in an input and returns its
//! canonical display form. They run on every keystroke before the field's
//! validator, so they must accept arbitrary text and never fail.
//!
//! # Example
//!
//! ```
//! use payform::format::{format_amount, format_card_number, format_cvv, format_expiry};
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_expiry("1225"), "12/25");
//! assert_eq!(format_cvv("12a345"), "1234");
//! assert_eq!(format_amount("$1,024.50"), "1024.50");
//! ```

/// Maximum number of characters kept in the CVV field.
pub const MAX_CVV_LENGTH: usize = 4;

/// Formats a card number as groups of four digits separated by spaces.
///
/// Every non-digit character is dropped before grouping, so the formatter is
/// a fixed point on its own output. No length cap is applied here.
///
/// # Example
///
/// ```
/// use payform::format::format_card_number;
///
/// assert_eq!(format_card_number("41111"), "4111 1");
/// assert_eq!(format_card_number("4111-1111 1111"), "4111 1111 1111");
/// assert_eq!(format_card_number("4111 1111 1111 1111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("abc"), "");
/// ```
pub fn format_card_number(input: &str) -> String {
    format_with_separator(input, " ")
}

/// Groups the digits of `input` in fours joined by `separator`.
fn format_with_separator(input: &str, separator: &str) -> String {
    let digits = strip_formatting(input);
    let mut result = String::with_capacity(digits.len() + (digits.len() / 4) * separator.len());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}

/// Formats an expiry date as `MM/YY` while the user types.
///
/// Non-digits are dropped. Once more than two digits are present a `/` is
/// inserted after the second one; digits past the fourth are discarded.
///
/// # Example
///
/// ```
/// use payform::format::format_expiry;
///
/// assert_eq!(format_expiry("1"), "1");
/// assert_eq!(format_expiry("12"), "12");
/// assert_eq!(format_expiry("123"), "12/3");
/// assert_eq!(format_expiry("12/345"), "12/34");
/// ```
pub fn format_expiry(input: &str) -> String {
    let digits = strip_formatting(input);

    if digits.len() <= 2 {
        return digits;
    }

    let end = digits.len().min(4);
    format!("{}/{}", &digits[..2], &digits[2..end])
}

/// Keeps at most the first four digits of a CVV.
///
/// # Example
///
/// ```
/// use payform::format::format_cvv;
///
/// assert_eq!(format_cvv("12"), "12");
/// assert_eq!(format_cvv("1 2 3"), "123");
/// assert_eq!(format_cvv("123456"), "1234");
/// ```
pub fn format_cvv(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_CVV_LENGTH)
        .collect()
}

/// Keeps only digits and a single decimal point in an amount.
///
/// Everything except `0`-`9` and `.` is dropped. When more than one `.`
/// remains, the first is kept and the digit groups after it are joined into
/// one fractional part.
///
/// # Example
///
/// ```
/// use payform::format::format_amount;
///
/// assert_eq!(format_amount("10.50"), "10.50");
/// assert_eq!(format_amount("1.2.3"), "1.23");
/// assert_eq!(format_amount("-5"), "5");
/// assert_eq!(format_amount("..5"), ".5");
/// ```
pub fn format_amount(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match kept.split_once('.') {
        Some((whole, fraction)) if fraction.contains('.') => {
            let fraction: String = fraction.chars().filter(|c| *c != '.').collect();
            format!("{}.{}", whole, fraction)
        }
        _ => kept,
    }
}

/// Strips everything but ASCII digits.
///
/// # Example
///
/// ```
/// use payform::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("12/25"), "1225");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_grouping() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("4"), "4");
        assert_eq!(format_card_number("4111"), "4111");
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number("4532015112830366"), "4532 0151 1283 0366");
        assert_eq!(format_card_number("340000000000009"), "3400 0000 0000 009");
    }

    #[test]
    fn test_card_number_no_length_cap() {
        assert_eq!(
            format_card_number("41111111111111111111"),
            "4111 1111 1111 1111 1111"
        );
    }

    #[test]
    fn test_card_number_strips_noise() {
        assert_eq!(format_card_number("4111-1111.1111_1111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("  4111  1"), "4111 1");
        assert_eq!(format_card_number("４１１１"), "");
    }

    #[test]
    fn test_card_number_idempotent() {
        for input in ["4111 1111 1111 1111", "4111 1", "", "3400 0000 0000 009"] {
            assert_eq!(format_card_number(input), input);
        }
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(format_with_separator("41111111", ""), "41111111");
        assert_eq!(format_with_separator("411111", " - "), "4111 - 11");
    }

    #[test]
    fn test_expiry() {
        assert_eq!(format_expiry(""), "");
        assert_eq!(format_expiry("0"), "0");
        assert_eq!(format_expiry("06"), "06");
        assert_eq!(format_expiry("062"), "06/2");
        assert_eq!(format_expiry("0624"), "06/24");
        assert_eq!(format_expiry("062499"), "06/24");
        assert_eq!(format_expiry("06/24"), "06/24");
        assert_eq!(format_expiry("ab06cd24"), "06/24");
    }

    #[test]
    fn test_expiry_backspace_over_slash() {
        // Deleting the "4" of "12/4" leaves "12/", which collapses back to "12"
        assert_eq!(format_expiry("12/"), "12");
    }

    #[test]
    fn test_cvv() {
        assert_eq!(format_cvv(""), "");
        assert_eq!(format_cvv("abc"), "");
        assert_eq!(format_cvv("1234"), "1234");
        assert_eq!(format_cvv("12345"), "1234");
        assert_eq!(format_cvv("1x2y3"), "123");
    }

    #[test]
    fn test_amount() {
        assert_eq!(format_amount(""), "");
        assert_eq!(format_amount("100"), "100");
        assert_eq!(format_amount("1,000.25"), "1000.25");
        assert_eq!(format_amount("abc"), "");
        assert_eq!(format_amount("1.2.3.4"), "1.234");
        assert_eq!(format_amount("1..2"), "1.2");
        assert_eq!(format_amount("5."), "5.");
        assert_eq!(format_amount("1e5"), "15");
    }

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting(""), "");
        assert_eq!(strip_formatting("a1b2c3"), "123");
    }
}
