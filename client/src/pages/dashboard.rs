//! Teller dashboard: pick a payment type, enter an account number when the
//! type needs one, then continue to customer details.
//!
//! DESIGN
//! ======
//! Form rules live in [`PaymentForm`]; this page wires signals to it and
//! persists the validated selection on the server session before moving on.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use teller::{PaymentType, routes};

use crate::state::auth::AuthState;
use crate::state::payment::PaymentForm;
use crate::util::auth::install_unauth_redirect;

pub(crate) fn card_class(selected: bool) -> &'static str {
    if selected { "payment-card payment-card--selected" } else { "payment-card" }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let form = RwSignal::new(PaymentForm::default());
    let saving = RwSignal::new(false);

    let teller_id = move || auth.with(|a| a.teller_id().unwrap_or_default().to_owned());

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    crate::net::api::logout().await;
                    auth.set(AuthState::resolved(None));
                    navigate(routes::LOGIN, NavigateOptions::default());
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                auth.set(AuthState::resolved(None));
                navigate(routes::LOGIN, NavigateOptions::default());
            }
        }
    };

    let on_continue = move |_| {
        if saving.get() {
            return;
        }
        let id = teller_id();
        let Some(Ok(selection)) = form.try_update(|f| f.submit(&id)) else {
            return;
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::save_selection(&selection).await {
                    Ok(_) => {
                        saving.set(false);
                        navigate(routes::CUSTOMER_DETAILS, NavigateOptions::default());
                    }
                    Err(message) => {
                        form.update(|f| f.error = Some(message));
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (selection, &navigate);
            saving.set(false);
        }
    };

    view! {
        <div class="page dashboard-page">
            <header class="dashboard-header">
                <h1 class="dashboard-header__title">"Payment Collection System"</h1>
                <div class="dashboard-header__session">
                    <span class="dashboard-header__teller">"Teller ID: " {teller_id}</span>
                    <button class="button button--danger" type="button" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="dashboard-main">
                <div class="panel">
                    <h2 class="panel__title">"Select Payment Type"</h2>

                    <div class="payment-cards">
                        {PaymentType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || card_class(form.with(|f| f.is_selected(kind)))
                                        on:click=move |_| form.update(|f| f.select(kind))
                                    >
                                        <div class="payment-card__text">
                                            <h3 class="payment-card__title">{kind.title()}</h3>
                                            <p class="payment-card__body">{kind.description()}</p>
                                        </div>
                                        <span class="payment-card__chevron">"›"</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || form.with(PaymentForm::shows_account_number)>
                        <label class="field">
                            <span class="field__label">"Account Number"</span>
                            <input
                                id="accountNumber"
                                class="field__input"
                                type="text"
                                placeholder="Enter customer account number"
                                prop:value=move || form.with(|f| f.account_number.clone())
                                on:input=move |ev| form.update(|f| f.set_account_number(event_target_value(&ev)))
                            />
                        </label>
                    </Show>

                    <Show when=move || form.with(|f| f.error.is_some())>
                        <div class="alert alert--error">
                            <p>{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                        </div>
                    </Show>

                    <Show when=move || form.with(PaymentForm::can_continue)>
                        <button
                            class="button button--primary button--block"
                            type="button"
                            disabled=move || saving.get()
                            on:click=on_continue.clone()
                        >
                            "Continue to Customer Details"
                        </button>
                    </Show>
                </div>
            </main>
        </div>
    }
}
