//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the authentication form's `update_user` callback and read by
//! route guards and user-aware pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;

/// The signed-in user, if any. Provided as `RwSignal<AuthState>` context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
}

impl AuthState {
    pub fn sign_in(&mut self, user: AuthUser) {
        self.user = Some(user);
    }

    /// Greeting name, falling back to a generic label for unnamed users.
    pub fn greeting_name(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|user| user.display_name().unwrap_or("friend").to_owned())
    }
}
