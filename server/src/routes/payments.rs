//! Payment-selection routes.
//!
//! The dashboard stores its validated selection on the teller session so
//! the next step can read it back, including after a reload.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use teller::{PaymentSelection, PaymentType};

use super::auth::AuthTeller;
use crate::error::{ApiError, ApiJson, error_response};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    pub payment_type: PaymentType,
    #[serde(default)]
    pub account_number: Option<String>,
}

/// `PUT /api/payments/selection`: validate and store the dashboard selection.
///
/// The teller id always comes from the session, never from the request.
pub async fn put_selection(
    State(state): State<AppState>,
    auth: AuthTeller,
    WithRejection(Json(request), _): ApiJson<SelectionRequest>,
) -> Response {
    let teller_id = auth.session.profile.teller_id.clone();
    let selection = match PaymentSelection::new(
        request.payment_type,
        request.account_number.as_deref().unwrap_or_default(),
        teller_id,
    ) {
        Ok(selection) => selection,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, &e),
    };

    if !state.sessions.set_selection(&auth.token, selection.clone()).await {
        return ApiError::Unauthorized.into_response();
    }
    tracing::info!(
        payment_type = %selection.payment_type,
        teller_id = %selection.teller_id,
        "payment selection stored"
    );
    Json(selection).into_response()
}

/// `GET /api/payments/selection`: the stored selection, if any.
pub async fn get_selection(
    State(state): State<AppState>,
    auth: AuthTeller,
) -> Result<Json<PaymentSelection>, ApiError> {
    state
        .sessions
        .selection(&auth.token)
        .await
        .map(Json)
        .ok_or(ApiError::NoSelection)
}

#[cfg(test)]
#[path = "payments_test.rs"]
mod tests;
