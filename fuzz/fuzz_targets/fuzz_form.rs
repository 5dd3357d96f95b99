//! Fuzz target for whole-form validation.
//!
//! Drives the controller over an in-memory page with arbitrary field text
//! and checks it agrees with headless validation.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use payform::controller::{FormEvent, FormValidator, SubmitOutcome};
use payform::dom::{Document, Element, MemoryDocument};
use payform::{validate_form, Field, FixedClock, FormConfig, YearMonth};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    fields: [&'a str; 5],
    year: u8,
    month: u8,
}

fuzz_target!(|input: Input<'_>| {
    let today = YearMonth::new(input.year % 100, input.month % 12 + 1).unwrap();
    let config = FormConfig::default();
    let doc = MemoryDocument::payment_form(&config);
    let form = FormValidator::bind(&doc, config, FixedClock(today)).unwrap();
    form.attach();

    for (field, text) in Field::ALL.into_iter().zip(input.fields) {
        doc.element_by_id(field.name()).unwrap().set_value(text);
        form.dispatch(FormEvent::Input(field));
    }

    let report = validate_form(&form.values(), today);
    let outcome = form.submit();
    assert_eq!(outcome == SubmitOutcome::Proceed, report.is_valid());
});
