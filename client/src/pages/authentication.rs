//! Login / signup form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering is a pure function of `AuthFormState`; all transitions go
//! through its methods. The parent supplies `update_user`; navigation goes
//! through the router.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{AuthUser, Field};
use crate::state::auth_form::{AuthFormState, PAGE_TITLE};
use crate::util::auth::RouterEffects;

#[component]
pub fn Authentication(#[prop(into)] update_user: Callback<AuthUser>) -> impl IntoView {
    let form = RwSignal::new(AuthFormState::new());

    let router_navigate = use_navigate();
    let effects = RouterEffects {
        update_user,
        navigate: move |path: &str| router_navigate(path, NavigateOptions::default()),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match form.try_update(AuthFormState::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                log::debug!("submit blocked: {err}");
                return;
            }
            None => return,
        };

        #[cfg(feature = "hydrate")]
        {
            let effects = effects.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_credentials(&request).await;
                if let Some(user) = form.try_update(|f| f.finish_submit(result)).flatten() {
                    crate::util::auth::complete_login(user, &effects);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&effects, request);
        }
    };

    view! {
        <div class="auth-page">
            {move || {
                form.with(AuthFormState::banner)
                    .map(|msg| view! { <h3 class="auth-banner">{msg}</h3> })
            }}
            <h2>{PAGE_TITLE}</h2>
            <h2>{move || form.with(|f| f.mode().heading())}</h2>
            <button class="auth-toggle" type="button" on:click=move |_| form.update(AuthFormState::toggle_mode)>
                {move || form.with(|f| f.mode().toggle_label())}
            </button>
            <form class="auth-form" on:submit=on_submit>
                <FormField form field=Field::Name label="Username" input_type="text"/>
                <FormField form field=Field::Password label="Password" input_type="password"/>
                <Show when=move || form.with(|f| f.mode().shows_email())>
                    <FormField form field=Field::Email label="Email" input_type="text"/>
                </Show>
                <input
                    class="auth-submit"
                    type="submit"
                    prop:value=move || form.with(|f| f.mode().submit_label())
                    disabled=move || form.with(AuthFormState::is_submitting)
                />
            </form>
        </div>
    }
}

/// Labeled input bound to one form field, with its touched-gated error.
#[component]
fn FormField(
    form: RwSignal<AuthFormState>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label for=field.as_str()>{label}</label>
        <input
            id=field.as_str()
            name=field.as_str()
            type=input_type
            prop:value=move || form.with(|f| f.values().get(field).to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| f.on_field_change(field, value));
            }
            on:blur=move |_| form.update(|f| f.on_field_blur(field))
        />
        {move || {
            form.with(|f| f.visible_error(field))
                .map(|msg| view! { <div class="field-error">{msg}</div> })
        }}
    }
}
