//! Fuzz target for the Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payform::luhn;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let as_text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    assert_eq!(
        luhn::validate(&digits),
        luhn::passes(&as_text),
        "digit and text checks disagree"
    );

    if !digits.is_empty() && digits.len() <= 18 {
        let check = luhn::check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }

    // Arbitrary text must not panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = luhn::passes(text);
    }
});
