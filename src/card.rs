//! Card network classification and card number length bounds.

use std::fmt;
use std::str::FromStr;

/// Minimum number of digits accepted in the card number field.
pub const MIN_CARD_DIGITS: usize = 15;

/// Maximum number of digits accepted in the card number field.
pub const MAX_CARD_DIGITS: usize = 16;

/// Card networks recognized by prefix.
///
/// `Unknown` is a regular value rather than an error: detection runs on
/// partial input while the user is still typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55
    Mastercard,
    /// American Express - prefix 34, 37
    Amex,
    /// Discover - prefix 6011, 65
    Discover,
    /// No known prefix matched
    Unknown,
}

impl CardType {
    /// All known card types, in detection priority order.
    pub const KNOWN: [CardType; 4] = [Self::Visa, Self::Mastercard, Self::Amex, Self::Discover];

    /// Returns the lower-case key for this card type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the human-readable network name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true unless this is `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardType {
    type Err = UnknownCardType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "amex" | "american express" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            "unknown" => Ok(Self::Unknown),
            _ => Err(UnknownCardType(s.to_string())),
        }
    }
}

/// Returned when parsing a card type name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCardType(pub String);

impl fmt::Display for UnknownCardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown card type: {}", self.0)
    }
}

impl std::error::Error for UnknownCardType {}
