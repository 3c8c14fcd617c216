//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the app-wide signed-in user; `auth_form` is the local state of
//! one mounted authentication form.

pub mod auth;
pub mod auth_form;
