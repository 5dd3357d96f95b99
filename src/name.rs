//! Cardholder name presence check.

use crate::error::FieldError;

/// Fewest UTF-16 code units a trimmed cardholder name may have.
///
/// Browsers measure input length in UTF-16 code units, so a character outside
/// the Basic Multilingual Plane counts twice.
pub const MIN_NAME_LENGTH: usize = 3;

/// Validates the cardholder name: at least three characters once surrounding
/// whitespace is trimmed, measured in UTF-16 code units.
///
/// # Example
///
/// ```
/// use payform::name::validate_cardholder_name;
///
/// assert!(validate_cardholder_name("  Ada Lovelace ").is_ok());
/// assert!(validate_cardholder_name(" Al ").is_err());
/// ```
pub fn validate_cardholder_name(input: &str) -> Result<(), FieldError> {
    if input.trim().encode_utf16().count() >= MIN_NAME_LENGTH {
        Ok(())
    } else {
        Err(FieldError::MissingName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_cardholder_name("Ada").is_ok());
        assert!(validate_cardholder_name("J. Doe").is_ok());
        assert!(validate_cardholder_name("Zoë").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(validate_cardholder_name(""), Err(FieldError::MissingName));
        assert_eq!(validate_cardholder_name("   "), Err(FieldError::MissingName));
        assert_eq!(validate_cardholder_name("Al"), Err(FieldError::MissingName));
        assert_eq!(validate_cardholder_name("\tAl\n"), Err(FieldError::MissingName));
    }

    #[test]
    fn test_length_in_utf16_units() {
        // Each emoji is a surrogate pair
        assert!(validate_cardholder_name("😀😀").is_ok());
        assert_eq!(validate_cardholder_name("😀"), Err(FieldError::MissingName));
        assert!(validate_cardholder_name("李小龙").is_ok());
    }

    #[test]
    fn test_inner_whitespace_counts() {
        assert!(validate_cardholder_name("A B").is_ok());
    }
}
