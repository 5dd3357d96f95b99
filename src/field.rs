//! The five payment form fields.

use std::fmt;
use std::str::FromStr;

use crate::error::{FieldError, FormError};
use crate::expiry::YearMonth;
use crate::{format, validate};

/// A field of the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Card number, formatted in groups of four
    CardNumber,
    /// Expiry date, formatted as `MM/YY`
    ExpiryDate,
    /// Card verification code
    Cvv,
    /// Name printed on the card
    CardholderName,
    /// Payment amount
    Amount,
}

impl Field {
    /// Every field, in form order. Submission validates them in this order.
    pub const ALL: [Field; 5] = [
        Self::CardNumber,
        Self::ExpiryDate,
        Self::Cvv,
        Self::CardholderName,
        Self::Amount,
    ];

    /// Returns the field's key, which is also its default element id.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CardNumber => "card_number",
            Self::ExpiryDate => "expiry_date",
            Self::Cvv => "cvv",
            Self::CardholderName => "cardholder_name",
            Self::Amount => "amount",
        }
    }

    /// Describes the field's element, for error reports.
    pub const fn role(&self) -> &'static str {
        match self {
            Self::CardNumber => "card number field",
            Self::ExpiryDate => "expiry date field",
            Self::Cvv => "CVV field",
            Self::CardholderName => "cardholder name field",
            Self::Amount => "amount field",
        }
    }

    /// Returns true if keystrokes in this field are reformatted.
    pub const fn has_formatter(&self) -> bool {
        !matches!(self, Self::CardholderName)
    }

    /// Applies the field's keystroke formatter.
    ///
    /// Returns `None` for fields without one.
    pub fn format(&self, value: &str) -> Option<String> {
        match self {
            Self::CardNumber => Some(format::format_card_number(value)),
            Self::ExpiryDate => Some(format::format_expiry(value)),
            Self::Cvv => Some(format::format_cvv(value)),
            Self::Amount => Some(format::format_amount(value)),
            Self::CardholderName => None,
        }
    }

    /// Runs the field's validator. `today` is only used by the expiry date.
    pub fn validate(&self, value: &str, today: YearMonth) -> Result<(), FieldError> {
        match self {
            Self::CardNumber => validate::validate_card_number(value),
            Self::ExpiryDate => validate::validate_expiry(value, today),
            Self::Cvv => validate::validate_cvv(value),
            Self::CardholderName => validate::validate_cardholder_name(value),
            Self::Amount => validate::validate_amount(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        match key.as_str() {
            "card_number" | "card" | "number" => Ok(Self::CardNumber),
            "expiry_date" | "expiry" => Ok(Self::ExpiryDate),
            "cvv" | "cvc" => Ok(Self::Cvv),
            "cardholder_name" | "name" => Ok(Self::CardholderName),
            "amount" => Ok(Self::Amount),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2024() -> YearMonth {
        YearMonth::new(24, 6).unwrap()
    }

    #[test]
    fn test_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("expiry".parse::<Field>(), Ok(Field::ExpiryDate));
        assert_eq!("Card-Number".parse::<Field>(), Ok(Field::CardNumber));
        assert_eq!("cvc".parse::<Field>(), Ok(Field::Cvv));
        assert!(matches!(
            "zip".parse::<Field>(),
            Err(FormError::UnknownField(name)) if name == "zip"
        ));
    }

    #[test]
    fn test_formatters() {
        assert_eq!(
            Field::CardNumber.format("4111111111111111").as_deref(),
            Some("4111 1111 1111 1111")
        );
        assert_eq!(Field::ExpiryDate.format("1225").as_deref(), Some("12/25"));
        assert_eq!(Field::Cvv.format("12345").as_deref(), Some("1234"));
        assert_eq!(Field::Amount.format("1.2.3").as_deref(), Some("1.23"));
        assert_eq!(Field::CardholderName.format(" Ada "), None);
        assert!(!Field::CardholderName.has_formatter());
    }

    #[test]
    fn test_validate_dispatch() {
        let today = june_2024();
        assert!(Field::CardNumber.validate("4532 0151 1283 0366", today).is_ok());
        assert_eq!(
            Field::ExpiryDate.validate("05/24", today),
            Err(FieldError::Expired)
        );
        assert!(Field::Cvv.validate("123", today).is_ok());
        assert_eq!(
            Field::CardholderName.validate("Al", today),
            Err(FieldError::MissingName)
        );
        assert!(Field::Amount.validate("10.50", today).is_ok());
    }
}
