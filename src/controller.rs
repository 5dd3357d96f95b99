//! The payment form controller.
//!
//! [`FormBindings`] resolves every element the form needs once, up front, and
//! fails with [`FormError::MissingElement`] if the page is missing one.
//! [`FormValidator`] owns the bindings and turns input, blur and submit
//! events into formatting, validation and UI updates.
//!
//! Events are delivered through [`FormValidator::dispatch`] and are only
//! handled between [`attach`](FormValidator::attach) and
//! [`detach`](FormValidator::detach).
//!
//! # Example
//!
//! ```
//! use payform::controller::{EventOutcome, FormEvent, FormValidator, SubmitOutcome};
//! use payform::dom::{Document, Element, MemoryDocument};
//! use payform::expiry::{FixedClock, YearMonth};
//! use payform::{Field, FormConfig};
//!
//! let config = FormConfig::default();
//! let doc = MemoryDocument::payment_form(&config);
//! let clock = FixedClock(YearMonth::new(24, 6).unwrap());
//!
//! let form = FormValidator::bind(&doc, config, clock).unwrap();
//! form.attach();
//!
//! let card = doc.element_by_id("card_number").unwrap();
//! card.set_value("4532015112830366");
//! form.dispatch(FormEvent::Input(Field::CardNumber));
//! assert_eq!(card.value(), "4532 0151 1283 0366");
//! assert!(card.has_class("is-valid"));
//!
//! // The other fields are still empty
//! let outcome = form.dispatch(FormEvent::Submit);
//! assert_eq!(outcome, EventOutcome::Submit(SubmitOutcome::Cancel));
//! ```

use std::cell::Cell;

use crate::config::FormConfig;
use crate::dom::{Document, Element};
use crate::error::{FieldError, FormError};
use crate::expiry::{Clock, SystemClock};
use crate::validate::FormValues;
use crate::{ui, Field};

/// Handles to every element the form uses.
#[derive(Debug, Clone)]
pub struct FormBindings<E> {
    fields: [E; 5],
    form: E,
    banner: E,
    submit: Option<E>,
}

impl<E: Element> FormBindings<E> {
    /// Looks up every element named by `config` in `doc`.
    ///
    /// The five fields, the form and the banner are required. The submit
    /// button is optional; without one, a passing submission simply has no
    /// button to disable.
    pub fn from_document<D>(doc: &D, config: &FormConfig) -> Result<Self, FormError>
    where
        D: Document<Element = E>,
    {
        let lookup = |role: &'static str, id: &str| {
            doc.element_by_id(id).ok_or_else(|| FormError::MissingElement {
                role,
                id: id.to_string(),
            })
        };

        let fields = [
            lookup(Field::CardNumber.role(), &config.ids.card_number)?,
            lookup(Field::ExpiryDate.role(), &config.ids.expiry_date)?,
            lookup(Field::Cvv.role(), &config.ids.cvv)?,
            lookup(Field::CardholderName.role(), &config.ids.cardholder_name)?,
            lookup(Field::Amount.role(), &config.ids.amount)?,
        ];

        Ok(Self {
            fields,
            form: lookup("payment form", &config.ids.form)?,
            banner: lookup("validation banner", &config.ids.banner)?,
            submit: doc.first_submit_button(),
        })
    }

    /// Returns the input bound to `field`.
    pub fn field(&self, field: Field) -> &E {
        &self.fields[field_index(field)]
    }

    /// Returns the form element.
    pub fn form(&self) -> &E {
        &self.form
    }

    /// Returns the banner element.
    pub fn banner(&self) -> &E {
        &self.banner
    }

    /// Returns the submit button, if the page has one.
    pub fn submit_button(&self) -> Option<&E> {
        self.submit.as_ref()
    }
}

fn field_index(field: Field) -> usize {
    match field {
        Field::CardNumber => 0,
        Field::ExpiryDate => 1,
        Field::Cvv => 2,
        Field::CardholderName => 3,
        Field::Amount => 4,
    }
}

/// An event delivered to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The user changed a field's text.
    Input(Field),
    /// A field lost focus.
    Blur(Field),
    /// The form is being submitted.
    Submit,
}

/// Whether a submission may go ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the submit button has been disabled.
    Proceed,
    /// At least one field failed; the browser submission must be cancelled.
    Cancel,
}

impl SubmitOutcome {
    /// Returns true if the submission must be cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancel)
    }
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The form is detached; nothing happened.
    Ignored,
    /// A field was (re)validated.
    Field {
        /// The field.
        field: Field,
        /// Its validation result.
        result: Result<(), FieldError>,
    },
    /// A submission was gated.
    Submit(SubmitOutcome),
}

/// Formats, validates and gates a payment form.
#[derive(Debug)]
pub struct FormValidator<E, C = SystemClock> {
    bindings: FormBindings<E>,
    config: FormConfig,
    clock: C,
    attached: Cell<bool>,
}

impl<E: Element, C: Clock> FormValidator<E, C> {
    /// Creates a detached controller over already resolved bindings.
    pub fn new(bindings: FormBindings<E>, config: FormConfig, clock: C) -> Self {
        Self {
            bindings,
            config,
            clock,
            attached: Cell::new(false),
        }
    }

    /// Resolves the elements named by `config` in `doc` and creates a
    /// detached controller.
    pub fn bind<D>(doc: &D, config: FormConfig, clock: C) -> Result<Self, FormError>
    where
        D: Document<Element = E>,
    {
        let bindings = FormBindings::from_document(doc, &config)?;
        Ok(Self::new(bindings, config, clock))
    }

    /// Starts handling events.
    pub fn attach(&self) {
        if !self.attached.replace(true) {
            tracing::debug!(form = %self.config.ids.form, "payment form attached");
        }
    }

    /// Stops handling events. Field state is left as it is.
    pub fn detach(&self) {
        if self.attached.replace(false) {
            tracing::debug!(form = %self.config.ids.form, "payment form detached");
        }
    }

    /// Returns true between `attach` and `detach`.
    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Handles one event. Returns [`EventOutcome::Ignored`] while detached.
    pub fn dispatch(&self, event: FormEvent) -> EventOutcome {
        if !self.is_attached() {
            tracing::trace!(?event, "event ignored, form detached");
            return EventOutcome::Ignored;
        }

        match event {
            FormEvent::Input(field) => EventOutcome::Field {
                field,
                result: self.on_input(field),
            },
            FormEvent::Blur(field) => EventOutcome::Field {
                field,
                result: self.validate_field(field),
            },
            FormEvent::Submit => EventOutcome::Submit(self.submit()),
        }
    }

    /// Reformats the field's text, then validates it.
    ///
    /// The value is only written back when formatting changed it.
    pub fn on_input(&self, field: Field) -> Result<(), FieldError> {
        let element = self.bindings.field(field);
        let current = element.value();

        if let Some(formatted) = field.format(&current) {
            if formatted != current {
                element.set_value(&formatted);
            }
        }

        self.validate_field(field)
    }

    /// Validates the field's current text and updates its visual state.
    pub fn validate_field(&self, field: Field) -> Result<(), FieldError> {
        let element = self.bindings.field(field);
        let result = field.validate(&element.value(), self.clock.today());

        let message = match result {
            Ok(()) => "",
            Err(err) => err.message(),
        };
        ui::apply_validity(element, result.is_ok(), message, &self.config.classes);

        tracing::trace!(%field, valid = result.is_ok(), "field validated");
        result
    }

    /// Gates a submission.
    ///
    /// Every field is validated, even after one has failed, so that all of
    /// them show their current state. On failure the banner is shown and the
    /// submit button stays enabled; on success the button is disabled and
    /// relabelled so the form cannot be sent twice.
    pub fn submit(&self) -> SubmitOutcome {
        if !self.validate_all() {
            return SubmitOutcome::Cancel;
        }

        if let Some(button) = &self.bindings.submit {
            button.set_disabled(true);
            button.set_text(&self.config.busy_label);
        }
        tracing::debug!("submission allowed");
        SubmitOutcome::Proceed
    }

    /// Validates every field and shows the banner if any failed.
    ///
    /// Unlike [`submit`](Self::submit) the submit button is never touched.
    /// Returns true if every field passed.
    pub fn validate_all(&self) -> bool {
        let results = Field::ALL.map(|field| self.validate_field(field));
        let failures = results.iter().filter(|r| r.is_err()).count();

        if failures > 0 {
            ui::show_banner(
                &self.bindings.banner,
                &self.config.banner_message,
                &self.config.classes,
            );
            tracing::debug!(failures, "submission blocked");
            return false;
        }
        true
    }

    /// Returns every field to neutral and hides the banner.
    pub fn reset(&self) {
        for field in Field::ALL {
            ui::clear_state(self.bindings.field(field), &self.config.classes);
        }
        ui::hide_banner(&self.bindings.banner, &self.config.classes);
    }

    /// Snapshots the text of every field.
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::default();
        for field in Field::ALL {
            values.set(field, self.bindings.field(field).value());
        }
        values
    }

    /// Returns the element bindings.
    pub fn bindings(&self) -> &FormBindings<E> {
        &self.bindings
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}
