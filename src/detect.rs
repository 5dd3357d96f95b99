//! Card type detection by number prefix.
//!
//! Only the leading digits matter, so detection works on partial input while
//! the user is typing. Prefixes are tested in a fixed priority order and the
//! first match wins.
//!
//! | Type | Prefix |
//! |------|--------|
//! | Visa | 4 |
//! | Mastercard | 51-55 |
//! | Amex | 34, 37 |
//! | Discover | 6011, 65 |

use crate::CardType;

/// Detects the card type of a card number string.
///
/// Whitespace anywhere in the input is ignored; any other character is kept,
/// so `"4-111"` is still Visa but `"-4111"` is unknown.
///
/// # Example
///
/// ```
/// use payform::{detect::detect_card_type, CardType};
///
/// assert_eq!(detect_card_type("4111 1111 1111 1111"), CardType::Visa);
/// assert_eq!(detect_card_type("340000000000009"), CardType::Amex);
/// assert_eq!(detect_card_type("9999"), CardType::Unknown);
/// ```
pub fn detect_card_type(input: &str) -> CardType {
    let compact: Vec<u8> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(4)
        .map(|c| if c.is_ascii() { c as u8 } else { 0 })
        .collect();

    detect_prefix(&compact)
}

/// Detects the card type from the leading bytes of a whitespace-free number.
#[inline]
pub fn detect_prefix(prefix: &[u8]) -> CardType {
    match prefix {
        [b'4', ..] => CardType::Visa,
        [b'5', b'1'..=b'5', ..] => CardType::Mastercard,
        [b'3', b'4', ..] | [b'3', b'7', ..] => CardType::Amex,
        [b'6', b'0', b'1', b'1', ..] | [b'6', b'5', ..] => CardType::Discover,
        _ => CardType::Unknown,
    }
}
