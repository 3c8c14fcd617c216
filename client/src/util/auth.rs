//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authentication form never reaches for ambient routing or user state:
//! whoever mounts it supplies an [`AuthEffects`] with the parent's
//! `update_user` callback and a navigate function.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::AuthUser;
use crate::state::auth::AuthState;

/// Route the form sends the user to after signing in.
pub const HOME_PATH: &str = "/";
/// Route serving the authentication form.
pub const AUTH_PATH: &str = "/authentication";

/// Collaborators notified after a successful submission.
pub trait AuthEffects {
    fn update_user(&self, user: AuthUser);
    fn navigate(&self, path: &str);
}

/// Hand the user to the parent exactly once, then go home.
pub fn complete_login(user: AuthUser, effects: &impl AuthEffects) {
    effects.update_user(user);
    effects.navigate(HOME_PATH);
}

/// [`AuthEffects`] backed by a Leptos callback and a router navigate function.
#[derive(Clone)]
pub struct RouterEffects<F> {
    pub update_user: Callback<AuthUser>,
    pub navigate: F,
}

impl<F> AuthEffects for RouterEffects<F>
where
    F: Fn(&str),
{
    fn update_user(&self, user: AuthUser) {
        self.update_user.run(user);
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}

/// Whether a page that needs a user should bounce to the form.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.user.is_none()
}

/// Redirect to the authentication form whenever no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(AUTH_PATH, NavigateOptions::default());
        }
    });
}
