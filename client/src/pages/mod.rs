//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; form semantics live in
//! `state::auth_form` so pages stay thin views.

pub mod authentication;
pub mod home;
