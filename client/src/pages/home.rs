//! Landing page for signed-in users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Home page: greets the current user, or sends them to the form.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <main class="home-page">
            {move || {
                auth.with(AuthState::greeting_name)
                    .map(|name| view! { <h1>"Welcome, " {name} "!"</h1> })
            }}
        </main>
    }
}
