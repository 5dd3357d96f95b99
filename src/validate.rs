//! Field validators and whole-form validation.
//!
//! Each validator takes the field's current, already formatted text and
//! returns `Ok(())` or the [`FieldError`] whose message the form displays.
//! [`validate_form`] runs all of them over a complete set of values without a
//! document, reporting every failure at once.
//!
//! # Example
//!
//! ```
//! use payform::expiry::YearMonth;
//! use payform::{validate_form, Field, FieldError, FormValues};
//!
//! let values = FormValues {
//!     card_number: "4532 0151 1283 0366".into(),
//!     expiry_date: "05/24".into(),
//!     cvv: "123".into(),
//!     cardholder_name: "Ada Lovelace".into(),
//!     amount: "10.50".into(),
//! };
//!
//! let report = validate_form(&values, YearMonth::new(24, 6).unwrap());
//! assert!(!report.is_valid());
//! assert_eq!(report.errors(), vec![(Field::ExpiryDate, FieldError::Expired)]);
//! ```

use std::fmt;
use zeroize::{Zeroize, Zeroizing};

use crate::card::{CardType, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::error::FieldError;
use crate::expiry::{self, YearMonth};
use crate::{detect, luhn, mask, Field};

pub use crate::amount::validate_amount;
pub use crate::cvv::validate_cvv;
pub use crate::name::validate_cardholder_name;

/// Validates a card number: whitespace is removed, then the rest must be
/// 15 or 16 ASCII digits passing the Luhn check.
///
/// # Example
///
/// ```
/// use payform::validate::validate_card_number;
///
/// assert!(validate_card_number("4532 0151 1283 0366").is_ok());
/// assert!(validate_card_number("1234 5678 9012 3456").is_err());
/// ```
pub fn validate_card_number(input: &str) -> Result<(), FieldError> {
    let digits: Zeroizing<String> =
        Zeroizing::new(input.chars().filter(|c| !c.is_whitespace()).collect());

    let length_ok = (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len());

    // `passes` rejects anything that is not an ASCII digit.
    if length_ok && luhn::passes(&digits) {
        Ok(())
    } else {
        Err(FieldError::InvalidCardNumber)
    }
}

/// Validates an `MM/YY` expiry date against the current month.
pub fn validate_expiry(input: &str, today: YearMonth) -> Result<(), FieldError> {
    expiry::check_expiry(input, today).map(|_| ())
}

/// Runs the validator for `field`.
#[inline]
pub fn validate_field(field: Field, value: &str, today: YearMonth) -> Result<(), FieldError> {
    field.validate(value, today)
}

/// The text of every payment form field.
///
/// `Debug` masks the card number and CVV, and both are wiped from memory on
/// drop.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct FormValues {
    /// Card number field text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub card_number: String,
    /// Expiry date field text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expiry_date: String,
    /// CVV field text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cvv: String,
    /// Cardholder name field text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cardholder_name: String,
    /// Amount field text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: String,
}

impl FormValues {
    /// Returns the text of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
            Field::CardholderName => &self.cardholder_name,
            Field::Amount => &self.amount,
        }
    }

    /// Replaces the text of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::CardNumber => &mut self.card_number,
            Field::ExpiryDate => &mut self.expiry_date,
            Field::Cvv => &mut self.cvv,
            Field::CardholderName => &mut self.cardholder_name,
            Field::Amount => &mut self.amount,
        };
        slot.zeroize();
        *slot = value.into();
    }

    /// Applies each field's keystroke formatter, as if every value had just
    /// been typed.
    pub fn formatted(&self) -> FormValues {
        let mut out = self.clone();
        for field in Field::ALL {
            if let Some(value) = field.format(self.get(field)) {
                out.set(field, value);
            }
        }
        out
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("card_number", &mask::mask_digits(&self.card_number))
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &mask::mask_all(&self.cvv))
            .field("cardholder_name", &self.cardholder_name)
            .field("amount", &self.amount)
            .finish()
    }
}

impl Drop for FormValues {
    fn drop(&mut self) {
        self.card_number.zeroize();
        self.cvv.zeroize();
    }
}

/// Outcome of validating every field of a form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormReport {
    results: [(Field, Result<(), FieldError>); 5],
    card_type: CardType,
    last_four: Option<String>,
    amount: Option<f64>,
}

impl FormReport {
    /// Returns true if every field passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    /// Returns each field's result, in form order.
    pub fn results(&self) -> &[(Field, Result<(), FieldError>)] {
        &self.results
    }

    /// Returns the result for one field.
    pub fn result(&self, field: Field) -> Result<(), FieldError> {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, result)| *result)
            .unwrap_or(Ok(()))
    }

    /// Returns the failing fields and why they failed, in form order.
    pub fn errors(&self) -> Vec<(Field, FieldError)> {
        self.results
            .iter()
            .filter_map(|(field, result)| result.err().map(|e| (*field, e)))
            .collect()
    }

    /// Returns the card type detected from the card number prefix.
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Returns the last four digits when the card number is valid.
    pub fn last_four(&self) -> Option<&str> {
        self.last_four.as_deref()
    }

    /// Returns the parsed amount when it is valid.
    pub fn amount(&self) -> Option<f64> {
        self.amount
    }
}

/// Validates every field of `values` against the month `today`.
///
/// Values are validated as given; call [`FormValues::formatted`] first to
/// mirror what the form would have displayed.
pub fn validate_form(values: &FormValues, today: YearMonth) -> FormReport {
    let results = Field::ALL.map(|field| (field, field.validate(values.get(field), today)));

    let card_ok = results[0].1.is_ok();
    let amount = crate::amount::parse_amount(&values.amount).ok();

    let report = FormReport {
        results,
        card_type: detect::detect_card_type(&values.card_number),
        last_four: card_ok.then(|| mask::last_four(&values.card_number)),
        amount,
    };

    tracing::debug!(
        card = %mask::mask_digits(&values.card_number),
        valid = report.is_valid(),
        failures = report.errors().len(),
        "validated form values"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2024() -> YearMonth {
        YearMonth::new(24, 6).unwrap()
    }

    fn good_values() -> FormValues {
        FormValues {
            card_number: "4532 0151 1283 0366".into(),
            expiry_date: "06/24".into(),
            cvv: "123".into(),
            cardholder_name: "Ada Lovelace".into(),
            amount: "10.50".into(),
        }
    }

    #[test]
    fn test_card_number_valid() {
        assert!(validate_card_number("4532015112830366").is_ok());
        assert!(validate_card_number("4532 0151 1283 0366").is_ok());
        assert!(validate_card_number("3400 0000 0000 009").is_ok());
        assert!(validate_card_number(" 4532\t0151 1283 0366\n").is_ok());
    }

    #[test]
    fn test_card_number_fails_luhn() {
        assert_eq!(
            validate_card_number("1234 5678 9012 3456"),
            Err(FieldError::InvalidCardNumber)
        );
    }

    #[test]
    fn test_card_number_length_bounds() {
        // Luhn-valid, but 13 and 19 digits
        assert!(validate_card_number("4222222222222").is_err());
        assert!(validate_card_number("4111111111111111110").is_err());
        assert!(validate_card_number("").is_err());
    }

    #[test]
    fn test_card_number_rejects_separators() {
        assert!(validate_card_number("4532-0151-1283-0366").is_err());
    }

    #[test]
    fn test_expiry_validator() {
        assert!(validate_expiry("06/24", june_2024()).is_ok());
        assert_eq!(validate_expiry("05/24", june_2024()), Err(FieldError::Expired));
        assert_eq!(
            validate_expiry("13/25", june_2024()),
            Err(FieldError::ExpiryFormat)
        );
    }

    #[test]
    fn test_validate_form_all_good() {
        let report = validate_form(&good_values(), june_2024());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
        assert_eq!(report.card_type(), CardType::Visa);
        assert_eq!(report.last_four(), Some("0366"));
        assert_eq!(report.amount(), Some(10.5));
    }

    #[test]
    fn test_validate_form_reports_every_failure() {
        let values = FormValues {
            card_number: "1234".into(),
            expiry_date: "1/24".into(),
            cvv: "1".into(),
            cardholder_name: " ".into(),
            amount: "0".into(),
        };
        let report = validate_form(&values, june_2024());
        assert_eq!(
            report.errors(),
            vec![
                (Field::CardNumber, FieldError::InvalidCardNumber),
                (Field::ExpiryDate, FieldError::ExpiryFormat),
                (Field::Cvv, FieldError::InvalidCvv),
                (Field::CardholderName, FieldError::MissingName),
                (Field::Amount, FieldError::InvalidAmount),
            ]
        );
        assert_eq!(report.last_four(), None);
        assert_eq!(report.amount(), None);
        assert_eq!(report.result(Field::Cvv), Err(FieldError::InvalidCvv));
    }

    #[test]
    fn test_formatted_values() {
        let raw = FormValues {
            card_number: "4532015112830366".into(),
            expiry_date: "0624".into(),
            cvv: "12345".into(),
            cardholder_name: " Ada ".into(),
            amount: "1.0.5".into(),
        };
        let formatted = raw.formatted();
        assert_eq!(formatted.card_number, "4532 0151 1283 0366");
        assert_eq!(formatted.expiry_date, "06/24");
        assert_eq!(formatted.cvv, "1234");
        assert_eq!(formatted.cardholder_name, " Ada ");
        assert_eq!(formatted.amount, "1.05");
    }

    #[test]
    fn test_get_and_set() {
        let mut values = FormValues::default();
        values.set(Field::Amount, "12");
        assert_eq!(values.get(Field::Amount), "12");
        assert_eq!(values.get(Field::Cvv), "");
    }

    #[test]
    fn test_debug_is_masked() {
        let debug = format!("{:?}", good_values());
        assert!(!debug.contains("4532 0151 1283 0366"));
        assert!(!debug.contains("4532"));
        assert!(debug.contains("0366"));
        assert!(!debug.contains("\"123\""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_missing_fields_default_empty() {
        let values: FormValues =
            serde_json::from_str(r#"{"cvv": "123", "amount": "5"}"#).unwrap();
        assert_eq!(values.cvv, "123");
        assert_eq!(values.amount, "5");
        assert_eq!(values.card_number, "");
        assert_eq!(values.cardholder_name, "");

        let empty: FormValues = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FormValues::default());
    }
}
