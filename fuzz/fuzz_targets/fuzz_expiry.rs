//! Fuzz target for expiry date parsing.
//!
//! Tests that parsing never panics and that accepted dates round-trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payform::expiry::{self, YearMonth};

fuzz_target!(|input: (&str, u8, u8)| {
    let (data, year, month) = input;
    let today = YearMonth::new(year % 100, month % 12 + 1).unwrap();

    let _ = data.parse::<YearMonth>();

    if let Ok(exp) = expiry::parse_expiry(data) {
        assert_eq!(exp.to_string(), data, "accepted dates are already canonical");
        assert_eq!(expiry::check_expiry(data, today).is_ok(), !exp.is_before(today));
    } else {
        assert!(expiry::check_expiry(data, today).is_err());
    }
});
