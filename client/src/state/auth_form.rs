//! Authentication form state: mode, values, touched fields, submission phase.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `Authentication` page keeps one `AuthFormState` in an `RwSignal` and
//! renders purely from it. Every event (keystroke, blur, toggle, submit,
//! response) is a method here so the whole flow is testable without a DOM.
//!
//! SUBMISSION
//! ==========
//! `Idle -> Submitting -> Idle | Failed`. A submit while `Submitting` is
//! refused, so at most one request is in flight per form.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::collections::BTreeSet;

use crate::net::api::SubmitError;
use crate::net::types::{AuthUser, Field, FormValues};
use crate::util::validation::{ValidationErrors, validate};

pub const PAGE_TITLE: &str = "Please Log in or Sign up!";

/// Which flow the form is presenting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Login,
    Signup,
}

impl Mode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }

    pub fn shows_email(self) -> bool {
        matches!(self, Self::Signup)
    }

    /// Fields rendered in this mode, in display order.
    pub fn visible_fields(self) -> &'static [Field] {
        match self {
            Self::Login => &[Field::Name, Field::Password],
            Self::Signup => &[Field::Name, Field::Password, Field::Email],
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Not a member?",
            Self::Signup => "Already a member?",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Register now!",
            Self::Signup => "Log In!",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log In!",
            Self::Signup => "Sign Up!",
        }
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Failed(SubmitError),
}

/// A validated submission ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: &'static str,
    pub body: FormValues,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthFormState {
    mode: Mode,
    values: FormValues,
    touched: BTreeSet<Field>,
    errors: ValidationErrors,
    phase: SubmitPhase,
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFormState {
    /// Empty form in login mode, validated once so `errors()` is never stale.
    pub fn new() -> Self {
        let mode = Mode::default();
        let values = FormValues::default();
        let errors = validate(&values, mode);
        Self { mode, values, touched: BTreeSet::new(), errors, phase: SubmitPhase::Idle }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        self.revalidate();
        log::debug!("auth form mode: {:?}", self.mode);
    }

    pub fn on_field_change(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.revalidate();
    }

    pub fn on_field_blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Error to render under `field`: only once it was blurred, and only while
    /// the field is part of the current mode.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.mode.visible_fields().contains(&field) || !self.is_touched(field) {
            return None;
        }
        self.errors.get(field)
    }

    /// Text for the red banner above the form, if the last attempt failed.
    pub fn banner(&self) -> Option<String> {
        let SubmitPhase::Failed(err) = &self.phase else {
            return None;
        };
        match err {
            SubmitError::Server { error, .. } => Some(error.message.clone()),
            SubmitError::Network(detail) => Some(format!("Could not reach the server: {detail}")),
            SubmitError::Decode(detail) => Some(format!("Unexpected response from server: {detail}")),
            SubmitError::Validation(_) | SubmitError::InFlight => None,
        }
    }

    /// Start a submission.
    ///
    /// Touches every visible field so all inline errors appear. Refuses while
    /// a request is in flight or while the form is invalid; in both cases the
    /// phase and banner are left as they were.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] or [`SubmitError::Validation`].
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitError> {
        if self.is_submitting() {
            log::warn!("submit ignored: request already in flight");
            return Err(SubmitError::InFlight);
        }

        self.touched.extend(self.mode.visible_fields().iter().copied());
        if !self.errors.is_empty() {
            return Err(SubmitError::Validation(self.errors.clone()));
        }

        self.phase = SubmitPhase::Submitting;
        Ok(SubmitRequest { endpoint: self.mode.endpoint(), body: self.values.clone() })
    }

    /// Record the outcome of the request started by [`Self::begin_submit`].
    ///
    /// Returns the user on success; the caller hands it to the parent.
    pub fn finish_submit(&mut self, result: Result<AuthUser, SubmitError>) -> Option<AuthUser> {
        match result {
            Ok(user) => {
                self.phase = SubmitPhase::Idle;
                Some(user)
            }
            Err(err) => {
                log::warn!("{} failed: {err}", self.mode.endpoint());
                self.phase = SubmitPhase::Failed(err);
                None
            }
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values, self.mode);
    }
}
