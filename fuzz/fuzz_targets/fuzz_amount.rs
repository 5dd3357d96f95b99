//! Fuzz target for amount parsing.
//!
//! Tests that the number prefix parser never panics and that accepted
//! amounts are positive.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payform::{amount, format};

fuzz_target!(|data: &str| {
    let _ = amount::parse_float_prefix(data);

    if let Ok(value) = amount::parse_amount(data) {
        assert!(value > 0.0, "accepted amount {} is not positive", value);
    }

    // Whatever the formatter leaves must still parse without panicking
    let formatted = format::format_amount(data);
    let _ = amount::validate_amount(&formatted);
});
