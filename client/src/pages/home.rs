//! Marketing landing page with the teller-login entry point.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Feature cards shown on the landing page, as `(title, description)`.
pub(crate) const FEATURES: [(&str, &str); 9] = [
    (
        "Secure Login System",
        "Multi-factor authentication with unique terminal IDs and secure session management for tellers.",
    ),
    (
        "Bill & Non-Bill Payments",
        "Process both utility bills and non-bill transactions with automated validation and verification.",
    ),
    (
        "Multiple Payment Methods",
        "Support for cash, bank transfers, checks, and e-wallet payments with real-time verification.",
    ),
    (
        "Digital Receipts",
        "Generate and send digital receipts instantly via email or SMS with unique transaction IDs.",
    ),
    (
        "Promissory Notes",
        "Handle partial payments with automated promissory note generation and follow-up scheduling.",
    ),
    (
        "Transaction Tracking",
        "Comprehensive audit trails and transaction logs for enhanced security and transparency.",
    ),
    ("SMS Notifications", "Automated SMS alerts for payment confirmations and transaction updates."),
    ("Secure Encryption", "End-to-end encryption for all transactions and customer data protection."),
    ("24/7 Support", "Round-the-clock technical support and assistance for tellers."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let on_login = move |_| navigate(teller::routes::LOGIN, NavigateOptions::default());

    view! {
        <div class="page home-page">
            <header class="hero">
                <h1 class="hero__title">"CEPALCO Payment Collection System"</h1>
                <p class="hero__lead">
                    "An official CEPALCO-accredited platform enabling secure bill payments, non-bill transactions, "
                    "and comprehensive payment processing with enhanced security and reliability."
                </p>
                <div class="hero__actions">
                    <button class="button button--primary" type="button" on:click=on_login>
                        "Teller Login"
                    </button>
                    <button class="button button--outline" type="button">
                        "System Guide"
                    </button>
                </div>
            </header>

            <section class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="feature-card">
                                <h3 class="feature-card__title">{*title}</h3>
                                <p class="feature-card__body">{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <footer class="site-footer">
                <span class="site-footer__name">"Widescope Promotional Resources Inc."</span>
                <p>"© 2024 Widescope Promotional Resources Inc. - Official CEPALCO-accredited Payment Center"</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;
