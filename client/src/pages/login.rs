//! Teller login: terminal id, username and password.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use teller::LoginRequest;

use crate::state::auth::AuthState;

/// Build a request from the raw field values; nothing is trimmed.
pub(crate) fn validate_login_input(
    terminal_id: &str,
    username: &str,
    password: &str,
) -> Result<LoginRequest, &'static str> {
    let request = LoginRequest {
        terminal_id: terminal_id.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
    };
    request.validate()?;
    Ok(request)
}

pub(crate) fn submit_label(loading: bool) -> &'static str {
    if loading { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let terminal_id = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        error.set(String::new());

        let request = match validate_login_input(&terminal_id.get(), &username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(resp) => {
                        auth.set(AuthState::resolved(Some(resp.teller)));
                        loading.set(false);
                        navigate(&resp.redirect, NavigateOptions::default());
                    }
                    Err(message) => {
                        error.set(message);
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, auth, &navigate);
        }
    };

    view! {
        <div class="page login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h2>"CEPALCO Payment Collection System"</h2>
                    <p class="login-card__subtitle">"Teller Authentication Portal"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert--error">
                            <p>{move || error.get()}</p>
                        </div>
                    </Show>

                    <label class="field">
                        <span class="field__label">"Terminal ID"</span>
                        <input
                            id="terminalId"
                            class="field__input"
                            type="text"
                            placeholder="Enter Terminal ID"
                            prop:value=move || terminal_id.get()
                            on:input=move |ev| terminal_id.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Username"</span>
                        <input
                            id="username"
                            class="field__input"
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            id="password"
                            class="field__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="button button--primary" type="submit" disabled=move || loading.get()>
                        {move || submit_label(loading.get())}
                    </button>

                    <a href="#" class="login-form__link">"Forgot password?"</a>
                </form>

                <p class="login-card__notice">"This is a secure system. All actions are logged and monitored."</p>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
