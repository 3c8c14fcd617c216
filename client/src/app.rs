//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::AuthUser;
use crate::pages::{authentication::Authentication, home::HomePage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the signed-in user and passes the form its `update_user` callback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    let update_user = Callback::new(move |user: AuthUser| {
        log::info!("signed in: {}", user.display_name().unwrap_or("<unnamed>"));
        auth.update(|state| state.sign_in(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-form.css"/>
        <Title text="Authentication"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=StaticSegment("authentication")
                    view=move || view! { <Authentication update_user=update_user/> }
                />
            </Routes>
        </Router>
    }
}
