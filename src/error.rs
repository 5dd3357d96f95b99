//! Error types for field validation and form binding.
//!
//! [`FieldError`] is an ordinary user-input failure: its [`message`](FieldError::message)
//! is what the form shows next to the field. [`FormError`] covers the few ways
//! setting up a form can go wrong.

use crate::Field;
use std::fmt;

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// The card number is not 15-16 digits or fails the Luhn check.
    InvalidCardNumber,

    /// The expiry date is not `MM/YY` with a month in 01-12.
    ExpiryFormat,

    /// The expiry date is well formed but before the current month.
    Expired,

    /// The CVV is not 3 or 4 digits.
    InvalidCvv,

    /// The cardholder name is shorter than three characters after trimming.
    MissingName,

    /// The amount does not start with a number, or is not positive.
    InvalidAmount,
}

impl FieldError {
    /// Returns the message shown in the field's error slot.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidCardNumber => "Please enter a valid card number",
            Self::ExpiryFormat => "Use MM/YY format",
            Self::Expired => "Card has expired",
            Self::InvalidCvv => "CVV must be 3-4 digits",
            Self::MissingName => "Please enter cardholder name",
            Self::InvalidAmount => "Please enter a valid amount",
        }
    }

    /// Returns the field this error belongs to.
    pub const fn field(&self) -> Field {
        match self {
            Self::InvalidCardNumber => Field::CardNumber,
            Self::ExpiryFormat | Self::Expired => Field::ExpiryDate,
            Self::InvalidCvv => Field::Cvv,
            Self::MissingName => Field::CardholderName,
            Self::InvalidAmount => Field::Amount,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Errors raised while binding a form or reading its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required element was not found in the document.
    MissingElement {
        /// What the element is used for, e.g. `"card number field"`.
        role: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A field name did not match any form field.
    UnknownField(String),

    /// A date override could not be parsed.
    InvalidDate(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { role, id } => {
                write!(f, "missing {} (no element with id '{}')", role, id)
            }
            Self::UnknownField(name) => {
                write!(
                    f,
                    "unknown field '{}' (expected one of: card_number, expiry_date, cvv, cardholder_name, amount)",
                    name
                )
            }
            Self::InvalidDate(input) => {
                write!(f, "invalid date '{}' (expected YY-MM)", input)
            }
        }
    }
}

impl std::error::Error for FormError {}
