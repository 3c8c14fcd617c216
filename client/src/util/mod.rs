//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing collaborators and validation rules from
//! page logic to improve reuse and testability.

pub mod auth;
pub mod validation;
