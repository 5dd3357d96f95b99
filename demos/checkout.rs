//! A scripted checkout against the in-memory page.
//!
//! Run with: cargo run --example checkout

use payform::controller::{EventOutcome, FormEvent, FormValidator};
use payform::dom::{Document, Element, MemoryDocument, MemoryElement};
use payform::{Field, FormConfig, FormError, SystemClock};

fn show(doc: &MemoryDocument, form: &FormValidator<MemoryElement>) {
    for field in Field::ALL {
        let Some(input) = doc.element_by_id(field.name()) else {
            continue;
        };
        let state = if input.has_class(&form.config().classes.valid) {
            "valid"
        } else if input.has_class(&form.config().classes.invalid) {
            "invalid"
        } else {
            "-"
        };
        let message = input
            .next_element_sibling()
            .map(|slot| slot.text())
            .unwrap_or_default();
        println!("  {:<16} {:<22} {:<8} {}", field.name(), input.value(), state, message);
    }
}

fn main() -> Result<(), FormError> {
    let config = FormConfig::default();
    let doc = MemoryDocument::payment_form(&config);
    let form = FormValidator::bind(&doc, config, SystemClock)?;
    form.attach();

    println!("Submitting an empty form:");
    let outcome = form.dispatch(FormEvent::Submit);
    println!("  -> {:?}", outcome);
    if let Some(banner) = doc.element_by_id("validation-message") {
        println!("  banner: {}", banner.text());
    }
    show(&doc, &form);

    println!("\nTyping card details:");
    for (field, text) in [
        (Field::CardNumber, "4532015112830366"),
        (Field::ExpiryDate, "1299"),
        (Field::Cvv, "12345"),
        (Field::CardholderName, "Ada Lovelace"),
        (Field::Amount, "$1,024.50"),
    ] {
        if let Some(input) = doc.element_by_id(field.name()) {
            input.set_value(text);
        }
        if let EventOutcome::Field { result: Err(e), .. } = form.dispatch(FormEvent::Input(field)) {
            println!("  {}: {}", field, e);
        }
    }
    show(&doc, &form);

    println!("\nSubmitting again:");
    println!("  -> {:?}", form.dispatch(FormEvent::Submit));
    if let Some(button) = doc.first_submit_button() {
        println!("  button: {:?}, disabled: {}", button.text(), button.is_disabled());
    }

    form.detach();
    Ok(())
}
