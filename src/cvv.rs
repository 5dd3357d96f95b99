//! CVV/CVC/CID validation.
//!
//! The form accepts any 3 or 4 digit code without checking it against the
//! card type: Amex prints four digits on the front, the other networks three
//! on the back.
//!
//! # Example
//!
//! ```
//! use payform::cvv::validate_cvv;
//!
//! assert!(validate_cvv("123").is_ok());
//! assert!(validate_cvv("1234").is_ok());
//! assert!(validate_cvv("12").is_err());
//! ```

use crate::error::FieldError;

/// Shortest accepted CVV.
pub const MIN_CVV_LENGTH: usize = 3;

/// Longest accepted CVV.
pub const MAX_CVV_LENGTH: usize = crate::format::MAX_CVV_LENGTH;

/// Validates a CVV: only ASCII digits, 3 or 4 of them.
pub fn validate_cvv(input: &str) -> Result<(), FieldError> {
    let length_ok = (MIN_CVV_LENGTH..=MAX_CVV_LENGTH).contains(&input.len());

    if length_ok && input.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::InvalidCvv)
    }
}
