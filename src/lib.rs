//! # payform
//!
//! Input formatting and validation for a payment entry form.
//!
//! ## Features
//!
//! - Keystroke formatters: card number grouping, `MM/YY` expiry, CVV and amount
//! - Field validators: Luhn + length, expiry window, CVV length, cardholder
//!   name, positive amount
//! - Card type detection (Visa, Mastercard, Amex, Discover)
//! - A form controller that updates validity classes and error slots and
//!   gates submission
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use payform::{format, luhn, validate, CardType};
//!
//! // Format as the user types
//! assert_eq!(format::format_card_number("4532015112830366"), "4532 0151 1283 0366");
//! assert_eq!(format::format_expiry("0624"), "06/24");
//!
//! // Validate
//! assert!(validate::validate_card_number("4532 0151 1283 0366").is_ok());
//! assert!(luhn::passes("4532015112830366"));
//!
//! // Detect the network
//! assert_eq!(payform::detect_card_type("340000000000009"), CardType::Amex);
//! ```
//!
//! ## Form Controller
//!
//! ```rust
//! use payform::controller::{FormEvent, FormValidator, SubmitOutcome};
//! use payform::dom::{Document, Element, MemoryDocument};
//! use payform::expiry::{FixedClock, YearMonth};
//! use payform::{Field, FormConfig};
//!
//! let config = FormConfig::default();
//! let doc = MemoryDocument::payment_form(&config);
//! let form = FormValidator::bind(&doc, config, FixedClock(YearMonth::new(24, 6).unwrap())).unwrap();
//! form.attach();
//!
//! for (id, value) in [
//!     ("card_number", "4532015112830366"),
//!     ("expiry_date", "0624"),
//!     ("cvv", "123"),
//!     ("cardholder_name", "Ada Lovelace"),
//!     ("amount", "10.50"),
//! ] {
//!     doc.element_by_id(id).unwrap().set_value(value);
//! }
//! for field in Field::ALL {
//!     form.dispatch(FormEvent::Input(field));
//! }
//!
//! assert_eq!(form.submit(), SubmitOutcome::Proceed);
//! assert_eq!(doc.first_submit_button().unwrap().text(), "Processing...");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Deserialize `FormValues` and `FormConfig` |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly browser binding |
//!
//! ## Security
//!
//! - `FormValues` masks the card number and CVV in `Debug` and zeroizes them on drop
//! - Logs only ever carry masked card numbers
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod amount;
pub mod card;
pub mod config;
pub mod controller;
pub mod cvv;
pub mod detect;
pub mod dom;
pub mod error;
pub mod expiry;
pub mod field;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod name;
pub mod ui;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{CardType, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use config::FormConfig;
pub use controller::{EventOutcome, FormBindings, FormEvent, FormValidator, SubmitOutcome};
pub use detect::detect_card_type;
pub use error::{FieldError, FormError};
pub use expiry::{Clock, FixedClock, SystemClock, YearMonth};
pub use field::Field;
pub use validate::{validate_field, validate_form, FormReport, FormValues};
