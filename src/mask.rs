//! Card number masking for logs, reports and debug output.
//!
//! Only the last four digits of a card number are ever shown. Use these
//! helpers anywhere a card number might be printed.

/// Returns the last four digits of a card number, ignoring separators.
///
/// Numbers with fewer than four digits are returned whole.
///
/// # Example
///
/// ```
/// use payform::mask::last_four;
///
/// assert_eq!(last_four("4111 1111 1111 1234"), "1234");
/// assert_eq!(last_four("12"), "12");
/// ```
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let start = digits.len().saturating_sub(4);
    digits[start..].iter().collect()
}

/// Masks a card number, showing only the last four digits.
///
/// Masked digits are grouped in fours with `-`, and the visible digits form
/// their own group: `****-****-****-1234`, or `****-****-***-0009` for a
/// 15-digit number.
///
/// # Example
///
/// ```
/// use payform::mask::mask_digits;
///
/// assert_eq!(mask_digits("4111111111111111"), "****-****-****-1111");
/// assert_eq!(mask_digits("3400 0000 0000 009"), "****-****-***-0009");
/// assert_eq!(mask_digits("123"), "123");
/// ```
pub fn mask_digits(input: &str) -> String {
    let digit_count = input.chars().filter(|c| c.is_ascii_digit()).count();
    let masked_count = digit_count.saturating_sub(4);

    let mut result = String::with_capacity(digit_count + digit_count / 4 + 1);
    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if masked_count > 0 {
        result.push('-');
    }

    result.push_str(&last_four(input));
    result
}

/// Replaces every character of a secret with `*`.
///
/// # Example
///
/// ```
/// use payform::mask::mask_all;
///
/// assert_eq!(mask_all("123"), "***");
/// ```
pub fn mask_all(input: &str) -> String {
    "*".repeat(input.chars().count())
}
