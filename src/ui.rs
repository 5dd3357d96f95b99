//! Visual validity state of a field.
//!
//! A field is in one of three states: valid (valid class), invalid (invalid
//! class, message in the error slot) or neutral (neither class, empty slot).
//! The error slot is the field's next element sibling, and only when it
//! carries the error-slot class; any other sibling is left alone.

use crate::config::ClassNames;
use crate::dom::Element;

/// Marks `element` valid or invalid and updates its error slot.
pub fn apply_validity<E: Element>(element: &E, valid: bool, message: &str, classes: &ClassNames) {
    let slot = error_slot(element, classes);

    if valid {
        element.remove_class(&classes.invalid);
        element.add_class(&classes.valid);
        if let Some(slot) = slot {
            slot.set_text("");
        }
    } else {
        element.remove_class(&classes.valid);
        element.add_class(&classes.invalid);
        if let Some(slot) = slot {
            slot.set_text(message);
        }
    }
}

/// Returns `element` to the neutral state.
pub fn clear_state<E: Element>(element: &E, classes: &ClassNames) {
    element.remove_class(&classes.valid);
    element.remove_class(&classes.invalid);
    if let Some(slot) = error_slot(element, classes) {
        slot.set_text("");
    }
}

/// Returns the error slot next to `element`, if there is one.
pub fn error_slot<E: Element>(element: &E, classes: &ClassNames) -> Option<E> {
    element
        .next_element_sibling()
        .filter(|sibling| sibling.has_class(&classes.error_slot))
}

/// Shows `message` in the banner.
pub fn show_banner<E: Element>(banner: &E, message: &str, classes: &ClassNames) {
    banner.set_text(message);
    banner.remove_class(&classes.hidden);
}

/// Hides the banner and clears its text.
pub fn hide_banner<E: Element>(banner: &E, classes: &ClassNames) {
    banner.set_text("");
    banner.add_class(&classes.hidden);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, MemoryElement};

    fn field_with_slot(slot_class: &str) -> (MemoryElement, MemoryElement) {
        let doc = MemoryDocument::new();
        let input = doc.append(None, "input");
        let slot = doc.append(None, "div").with_class(slot_class);
        (input, slot)
    }

    #[test]
    fn test_valid_clears_slot() {
        let classes = ClassNames::default();
        let (input, slot) = field_with_slot("form-error");
        slot.set_text("old message");
        input.add_class("is-invalid");

        apply_validity(&input, true, "ignored", &classes);

        assert!(input.has_class("is-valid"));
        assert!(!input.has_class("is-invalid"));
        assert_eq!(slot.text(), "");
    }

    #[test]
    fn test_invalid_writes_slot() {
        let classes = ClassNames::default();
        let (input, slot) = field_with_slot("form-error");
        input.add_class("is-valid");

        apply_validity(&input, false, "CVV must be 3-4 digits", &classes);

        assert!(input.has_class("is-invalid"));
        assert!(!input.has_class("is-valid"));
        assert_eq!(slot.text(), "CVV must be 3-4 digits");
    }

    #[test]
    fn test_unmarked_sibling_untouched() {
        let classes = ClassNames::default();
        let (input, sibling) = field_with_slot("help-text");
        sibling.set_text("Printed on the back");

        apply_validity(&input, false, "CVV must be 3-4 digits", &classes);
        assert_eq!(sibling.text(), "Printed on the back");

        apply_validity(&input, true, "", &classes);
        assert_eq!(sibling.text(), "Printed on the back");
    }

    #[test]
    fn test_no_sibling() {
        let classes = ClassNames::default();
        let doc = MemoryDocument::new();
        let input = doc.append(None, "input");

        apply_validity(&input, false, "message", &classes);
        assert!(input.has_class("is-invalid"));
        assert!(error_slot(&input, &classes).is_none());
    }

    #[test]
    fn test_clear_state() {
        let classes = ClassNames::default();
        let (input, slot) = field_with_slot("form-error");
        apply_validity(&input, false, "message", &classes);

        clear_state(&input, &classes);

        assert!(!input.has_class("is-valid"));
        assert!(!input.has_class("is-invalid"));
        assert_eq!(slot.text(), "");
    }

    #[test]
    fn test_banner() {
        let classes = ClassNames::default();
        let doc = MemoryDocument::new();
        let banner = doc.append(None, "div").with_class("hidden");

        show_banner(&banner, "Please correct the errors in the form.", &classes);
        assert!(!banner.has_class("hidden"));
        assert_eq!(banner.text(), "Please correct the errors in the form.");

        hide_banner(&banner, &classes);
        assert!(banner.has_class("hidden"));
        assert_eq!(banner.text(), "");
    }
}
