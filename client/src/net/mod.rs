//! Networking modules for the authentication endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single form submission request and `types` defines the
//! JSON bodies exchanged with `/login` and `/signup`.

pub mod api;
pub mod types;
