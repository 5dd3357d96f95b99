//! Fuzz target for the keystroke formatters.
//!
//! Formatters run on whatever is in an input, so they must never panic and
//! must be fixed points on their own output.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payform::{format, Field};

fuzz_target!(|data: &str| {
    for field in Field::ALL {
        if let Some(once) = field.format(data) {
            let twice = field.format(&once);
            assert_eq!(twice.as_deref(), Some(once.as_str()), "{} formatter not idempotent", field);
        }
    }

    let formatted = format::format_card_number(data);
    assert_eq!(
        format::strip_formatting(&formatted),
        format::strip_formatting(data),
        "Card formatting should preserve digits"
    );
    assert!(format::format_cvv(data).len() <= format::MAX_CVV_LENGTH);
});
