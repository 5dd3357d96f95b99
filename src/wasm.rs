//! WebAssembly bindings for the payment form.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { WasmFormValidator, format_card_number, detect_card_type } from 'payform';
//!
//! await init();
//!
//! // Bind to the page and start handling input, blur and submit events
//! const form = new WasmFormValidator(document);
//! form.attach();
//!
//! // Stateless helpers
//! format_card_number("4111111111111111");  // "4111 1111 1111 1111"
//! detect_card_type("340000000000009");     // "amex"
//!
//! // Later, e.g. when the page section is torn down
//! form.detach();
//! ```

#![cfg(feature = "wasm")]

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::controller::{EventOutcome, FormEvent, FormValidator, SubmitOutcome};
use crate::dom::{Document, Element};
use crate::expiry::{Clock, SystemClock};
use crate::{Field, FormConfig};

#[wasm_bindgen]
extern "C" {
    /// The page's `document`.
    #[wasm_bindgen(js_name = Document)]
    #[derive(Debug, Clone)]
    pub type DomDocument;

    #[wasm_bindgen(method, js_name = getElementById)]
    fn get_element_by_id(this: &DomDocument, id: &str) -> Option<DomElement>;

    #[wasm_bindgen(method, js_name = querySelector)]
    fn query_selector(this: &DomDocument, selector: &str) -> Option<DomElement>;

    /// An element of the page.
    #[wasm_bindgen(js_name = HTMLElement)]
    #[derive(Debug, Clone)]
    pub type DomElement;

    #[wasm_bindgen(method, getter = value)]
    fn input_value(this: &DomElement) -> Option<String>;

    #[wasm_bindgen(method, setter = value)]
    fn set_input_value(this: &DomElement, value: &str);

    #[wasm_bindgen(method, getter = classList)]
    fn class_list(this: &DomElement) -> DomTokenList;

    #[wasm_bindgen(method, getter = textContent)]
    fn text_content(this: &DomElement) -> Option<String>;

    #[wasm_bindgen(method, setter = textContent)]
    fn set_text_content(this: &DomElement, text: &str);

    #[wasm_bindgen(method, setter = disabled)]
    fn set_disabled_attr(this: &DomElement, disabled: bool);

    #[wasm_bindgen(method, getter = nextElementSibling)]
    fn next_sibling(this: &DomElement) -> Option<DomElement>;

    #[wasm_bindgen(method, js_name = addEventListener)]
    fn add_event_listener(this: &DomElement, kind: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = removeEventListener)]
    fn remove_event_listener(this: &DomElement, kind: &str, listener: &js_sys::Function);

    type DomTokenList;

    #[wasm_bindgen(method)]
    fn add(this: &DomTokenList, token: &str);

    #[wasm_bindgen(method)]
    fn remove(this: &DomTokenList, token: &str);

    #[wasm_bindgen(method)]
    fn contains(this: &DomTokenList, token: &str) -> bool;

    /// A DOM event passed to listeners.
    pub type DomEvent;

    #[wasm_bindgen(method, js_name = preventDefault)]
    fn prevent_default(this: &DomEvent);
}

impl Element for DomElement {
    fn value(&self) -> String {
        self.input_value().unwrap_or_default()
    }

    fn set_value(&self, value: &str) {
        self.set_input_value(value);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.class_list().add(class);
    }

    fn remove_class(&self, class: &str) {
        self.class_list().remove(class);
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(text);
    }

    fn set_disabled(&self, disabled: bool) {
        self.set_disabled_attr(disabled);
    }

    fn next_element_sibling(&self) -> Option<Self> {
        self.next_sibling()
    }
}

impl Document for DomDocument {
    type Element = DomElement;

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.get_element_by_id(id)
    }

    fn first_submit_button(&self) -> Option<DomElement> {
        self.query_selector("[type=\"submit\"]")
    }
}

type Listener = Closure<dyn FnMut(DomEvent)>;

/// A payment form bound to the page.
#[wasm_bindgen]
pub struct WasmFormValidator {
    inner: Rc<FormValidator<DomElement, SystemClock>>,
    listeners: Vec<(DomElement, &'static str, Listener)>,
}

#[wasm_bindgen]
impl WasmFormValidator {
    /// Binds to the stock element ids of `document`.
    ///
    /// Throws if any field, the form or the banner is missing.
    #[wasm_bindgen(constructor)]
    pub fn new(document: DomDocument) -> Result<WasmFormValidator, JsValue> {
        let inner = FormValidator::bind(&document, FormConfig::default(), SystemClock)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            inner: Rc::new(inner),
            listeners: Vec::new(),
        })
    }

    /// Registers input, blur and submit listeners.
    pub fn attach(&mut self) {
        if self.inner.is_attached() {
            return;
        }
        self.inner.attach();

        for field in Field::ALL {
            let element = self.inner.bindings().field(field).clone();
            self.listen(element.clone(), "input", FormEvent::Input(field));
            self.listen(element, "blur", FormEvent::Blur(field));
        }

        let form = self.inner.bindings().form().clone();
        let inner = Rc::clone(&self.inner);
        let on_submit: Listener = Closure::wrap(Box::new(move |event: DomEvent| {
            if let EventOutcome::Submit(SubmitOutcome::Cancel) = inner.dispatch(FormEvent::Submit)
            {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(DomEvent)>);
        form.add_event_listener("submit", on_submit.as_ref().unchecked_ref());
        self.listeners.push((form, "submit", on_submit));
    }

    /// Removes every listener registered by `attach`.
    pub fn detach(&mut self) {
        for (element, kind, listener) in self.listeners.drain(..) {
            element.remove_event_listener(kind, listener.as_ref().unchecked_ref());
        }
        self.inner.detach();
    }

    /// Returns true while listeners are registered.
    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.inner.is_attached()
    }

    /// Returns every field to neutral and hides the banner.
    pub fn reset(&self) {
        self.inner.reset();
    }

    /// Validates every field without submitting.
    ///
    /// Shows the banner on failure; the submit button is left as it is.
    /// Returns true if every field passed.
    pub fn validate_all(&self) -> bool {
        self.inner.validate_all()
    }
}

impl WasmFormValidator {
    fn listen(&mut self, element: DomElement, kind: &'static str, event: FormEvent) {
        let inner = Rc::clone(&self.inner);
        let listener: Listener = Closure::wrap(Box::new(move |_: DomEvent| {
            inner.dispatch(event);
        }) as Box<dyn FnMut(DomEvent)>);
        element.add_event_listener(kind, listener.as_ref().unchecked_ref());
        self.listeners.push((element, kind, listener));
    }
}

impl Drop for WasmFormValidator {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Result of validating one field.
#[wasm_bindgen]
pub struct FieldResult {
    valid: bool,
    message: Option<String>,
}

#[wasm_bindgen]
impl FieldResult {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

/// Validates one field's text against the current month.
///
/// # Example
/// ```javascript
/// const result = validate_field("cvv", "12");
/// console.log(result.valid);    // false
/// console.log(result.message);  // "CVV must be 3-4 digits"
/// ```
#[wasm_bindgen]
pub fn validate_field(field: &str, value: &str) -> Result<FieldResult, JsValue> {
    let field: Field = field
        .parse()
        .map_err(|e: crate::FormError| JsValue::from_str(&e.to_string()))?;

    Ok(match field.validate(value, SystemClock.today()) {
        Ok(()) => FieldResult {
            valid: true,
            message: None,
        },
        Err(e) => FieldResult {
            valid: false,
            message: Some(e.message().to_string()),
        },
    })
}

/// Groups a card number in fours.
#[wasm_bindgen]
pub fn format_card_number(value: &str) -> String {
    crate::format::format_card_number(value)
}

/// Formats an expiry date as `MM/YY`.
#[wasm_bindgen]
pub fn format_expiry(value: &str) -> String {
    crate::format::format_expiry(value)
}

/// Keeps the first four digits of a CVV.
#[wasm_bindgen]
pub fn format_cvv(value: &str) -> String {
    crate::format::format_cvv(value)
}

/// Keeps digits and a single decimal point.
#[wasm_bindgen]
pub fn format_amount(value: &str) -> String {
    crate::format::format_amount(value)
}

/// Checks a digit string with the Luhn algorithm.
#[wasm_bindgen]
pub fn luhn_check(digits: &str) -> bool {
    crate::luhn::passes(digits)
}

/// Detects the card type: "visa", "mastercard", "amex", "discover" or "unknown".
#[wasm_bindgen]
pub fn detect_card_type(value: &str) -> String {
    crate::detect::detect_card_type(value).name().to_string()
}
