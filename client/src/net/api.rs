//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display-ready strings. When the server sent an
//! `ErrorBody` its message is used verbatim so the teller sees exactly what
//! the identity provider said.

#![allow(clippy::unused_async)]

use teller::{ErrorBody, LoginRequest, LoginResponse, PaymentSelection, TellerProfile};

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

/// Message for a failed call: the `ErrorBody` message when present,
/// otherwise `fallback`.
pub fn failure_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

pub fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the message to show on the login form.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        use teller::login::GENERIC_LOGIN_FAILURE;

        let resp = gloo_net::http::Request::post(teller::routes::API_LOGIN)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| GENERIC_LOGIN_FAILURE.to_owned())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(failure_message(&body, GENERIC_LOGIN_FAILURE));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|_| GENERIC_LOGIN_FAILURE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the signed-in teller from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_teller() -> Option<TellerProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(teller::routes::API_ME)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<TellerProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current teller by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(teller::routes::API_LOGOUT)
            .send()
            .await;
    }
}

/// Store the dashboard selection via `PUT /api/payments/selection`.
///
/// # Errors
///
/// Returns a display message if the request fails or the server rejects
/// the selection.
pub async fn save_selection(selection: &PaymentSelection) -> Result<PaymentSelection, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "paymentType": selection.payment_type,
            "accountNumber": selection.account_number,
        });
        let resp = gloo_net::http::Request::put(teller::routes::API_SELECTION)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(failure_message(&body, &request_failed_message("save selection", status)));
        }
        resp.json::<PaymentSelection>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selection;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Read the stored selection from `GET /api/payments/selection`.
pub async fn fetch_selection() -> Option<PaymentSelection> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(teller::routes::API_SELECTION)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PaymentSelection>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
