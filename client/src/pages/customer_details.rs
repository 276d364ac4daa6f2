//! Next step after the dashboard. Shows the selection stored on the teller
//! session; customer lookup itself is out of scope here.

#[cfg(test)]
#[path = "customer_details_test.rs"]
mod customer_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use teller::{PaymentSelection, routes};

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Label/value rows rendered for a stored selection.
pub(crate) fn selection_rows(selection: &PaymentSelection) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Payment Type", selection.payment_type.title().to_owned()),
        ("Teller ID", selection.teller_id.clone()),
    ];
    if let Some(account) = &selection.account_number {
        rows.insert(1, ("Account Number", account.clone()));
    }
    rows
}

#[component]
pub fn CustomerDetailsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let selection = RwSignal::new(None::<PaymentSelection>);
    let loaded = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        selection.set(crate::net::api::fetch_selection().await);
        loaded.set(true);
    });

    view! {
        <div class="page customer-details-page">
            <div class="panel">
                <h2 class="panel__title">"Customer Details"</h2>
                {move || match selection.get() {
                    Some(sel) => view! {
                        <dl class="selection-summary">
                            {selection_rows(&sel)
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                })
                                .collect_view()}
                        </dl>
                    }
                    .into_any(),
                    None if loaded.get() => view! {
                        <p class="panel__empty">"No payment type selected yet."</p>
                    }
                    .into_any(),
                    None => view! { <p class="panel__empty">"Loading..."</p> }.into_any(),
                }}
                <a class="button button--outline" href=routes::DASHBOARD>"Back to Dashboard"</a>
            </div>
        </div>
    }
}
