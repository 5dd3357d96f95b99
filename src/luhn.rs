//! Luhn checksum used to validate card numbers.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) catches every
//! single-digit typo and most adjacent transpositions in a card number.
//!
//! # Example
//!
//! ```
//! use payform::luhn;
//!
//! assert!(luhn::passes("4532015112830366"));
//! assert!(!luhn::passes("4532015112830367"));
//! assert!(!luhn::passes(""));
//! ```

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a sequence of digits (0-9) with the Luhn algorithm.
///
/// Returns `false` for an empty slice.
///
/// # Example
///
/// ```
/// use payform::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Checks a string of ASCII digits with the Luhn algorithm.
///
/// Any character other than `0`-`9` makes the input invalid, as does an
/// empty string. Callers strip separators first.
///
/// # Example
///
/// ```
/// use payform::luhn::passes;
///
/// assert!(passes("4111111111111111"));
/// assert!(!passes("4111 1111 1111 1111"));
/// assert!(!passes("41x1"));
/// ```
pub fn passes(input: &str) -> bool {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u8> = input.bytes().map(|b| b - b'0').collect();
    validate(&digits)
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// The rightmost digit is never doubled; every second digit moving left is.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    let mut double = false;

    for &digit in digits.iter().rev() {
        if double {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        double = !double;
    }

    sum
}

/// Computes the digit that completes `digits` into a Luhn-valid number.
///
/// # Example
///
/// ```
/// use payform::luhn::check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(check_digit(&partial), 1);
/// ```
pub fn check_digit(digits: &[u8]) -> u8 {
    // Appending a zero shifts every existing digit one place left, so the
    // doubling pattern matches the completed number.
    let mut padded = Vec::with_capacity(digits.len() + 1);
    padded.extend_from_slice(digits);
    padded.push(0);

    let sum = compute_checksum(&padded);
    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(passes("4532015112830366"));
        assert!(passes("4111111111111111"));
        assert!(passes("5500000000000004"));
        assert!(passes("340000000000009"));
        assert!(passes("6011000000000004"));
        assert!(passes("378282246310005"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!passes("4532015112830367"));
        assert!(!passes("1234567890123456"));
        assert!(!passes("4111111111111112"));
    }

    #[test]
    fn test_empty_and_non_numeric() {
        assert!(!passes(""));
        assert!(!passes("abcd"));
        assert!(!passes("4111-1111-1111-1111"));
        assert!(!passes("４１１１"));
        assert!(!validate(&[]));
    }

    #[test]
    fn test_single_digit() {
        assert!(passes("0"));
        assert!(!passes("1"));
        assert!(!passes("5"));
    }

    #[test]
    fn test_checksum_sum() {
        // 4 5 3 2 from the right: 2 + (3*2) + 5 + (4*2 - 9) = 2 + 6 + 5 + 8
        assert_eq!(compute_checksum(&[4, 5, 3, 2]), 21);
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]), 1);
        assert_eq!(check_digit(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 4);
        assert_eq!(check_digit(&[3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 9);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
