//! Element ids and class names the form binds to.
//!
//! The defaults match the stock payment page. With the `serde` feature a
//! [`FormConfig`] can be read from JSON; missing keys keep their defaults.

use crate::Field;

/// Everything the controller needs to know about the page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormConfig {
    /// Element ids.
    pub ids: ElementIds,
    /// Marker classes.
    pub classes: ClassNames,
    /// Text shown in the banner when submission is blocked.
    pub banner_message: String,
    /// Submit button label while the form is being submitted.
    pub busy_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            banner_message: "Please correct the errors in the form.".to_string(),
            busy_label: "Processing...".to_string(),
        }
    }
}

/// Ids of the elements bound by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementIds {
    /// Card number input.
    pub card_number: String,
    /// Expiry date input.
    pub expiry_date: String,
    /// CVV input.
    pub cvv: String,
    /// Cardholder name input.
    pub cardholder_name: String,
    /// Amount input.
    pub amount: String,
    /// The `<form>` element.
    pub form: String,
    /// Banner for the aggregate error message.
    pub banner: String,
}

impl ElementIds {
    /// Returns the id bound to `field`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
            Field::CardholderName => &self.cardholder_name,
            Field::Amount => &self.amount,
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            card_number: Field::CardNumber.name().to_string(),
            expiry_date: Field::ExpiryDate.name().to_string(),
            cvv: Field::Cvv.name().to_string(),
            cardholder_name: Field::CardholderName.name().to_string(),
            amount: Field::Amount.name().to_string(),
            form: "payment-form".to_string(),
            banner: "validation-message".to_string(),
        }
    }
}

/// Marker classes toggled by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassNames {
    /// Set on a field that passed validation.
    pub valid: String,
    /// Set on a field that failed validation.
    pub invalid: String,
    /// Marks a field's sibling as its error slot.
    pub error_slot: String,
    /// Hides the banner.
    pub hidden: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            valid: "is-valid".to_string(),
            invalid: "is-invalid".to_string(),
            error_slot: "form-error".to_string(),
            hidden: "hidden".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let ids = ElementIds::default();
        assert_eq!(ids.field(Field::CardNumber), "card_number");
        assert_eq!(ids.field(Field::ExpiryDate), "expiry_date");
        assert_eq!(ids.field(Field::Cvv), "cvv");
        assert_eq!(ids.field(Field::CardholderName), "cardholder_name");
        assert_eq!(ids.field(Field::Amount), "amount");
        assert_eq!(ids.form, "payment-form");
        assert_eq!(ids.banner, "validation-message");
    }

    #[test]
    fn test_default_messages() {
        let config = FormConfig::default();
        assert_eq!(config.banner_message, "Please correct the errors in the form.");
        assert_eq!(config.busy_label, "Processing...");
        assert_eq!(config.classes.error_slot, "form-error");
    }
}
