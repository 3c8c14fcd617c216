//! Schema validation for the authentication form.
//!
//! Rules are evaluated against the full value set on every change; whether an
//! error is actually shown is decided by the form state (touched gating).

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use email_address::{EmailAddress, Options};

use crate::net::types::{Field, FormValues};
use crate::state::auth_form::Mode;

pub const NAME_REQUIRED: &str = "Please enter a user name";
pub const PASSWORD_REQUIRED: &str = "Please enter a password";
pub const EMAIL_REQUIRED: &str = "Please enter an email";
pub const EMAIL_INVALID: &str = "email must be a valid email";

/// Per-field validation messages, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Validate `values` for the given mode.
///
/// The email field only exists in signup mode, so login never reports it.
pub fn validate(values: &FormValues, mode: Mode) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if values.name.is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if values.password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED);
    }
    if mode.shows_email() {
        if values.email.is_empty() {
            errors.insert(Field::Email, EMAIL_REQUIRED);
        } else if !is_well_formed_email(&values.email) {
            errors.insert(Field::Email, EMAIL_INVALID);
        }
    }

    errors
}

/// Plain `local@domain.tld` only: no display name, domain literal, or quoted
/// local part.
fn is_well_formed_email(email: &str) -> bool {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();
    !email.contains('"') && EmailAddress::parse_with_options(email, options).is_ok()
}
