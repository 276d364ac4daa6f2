//! Auth routes: teller login, current-teller lookup and logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::WithRejection;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use teller::{LoginRequest, LoginResponse, TellerProfile};
use time::Duration;

use crate::error::{ApiError, ApiJson, error_response};
use crate::services::login::{self as login_svc, LoginError};
use crate::services::session::TellerSession;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "teller_session";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

pub(crate) fn login_error_status(err: &LoginError) -> StatusCode {
    match err {
        LoginError::MissingFields => StatusCode::BAD_REQUEST,
        LoginError::CredentialsRejected(_) => StatusCode::UNAUTHORIZED,
        LoginError::ProviderUnavailable | LoginError::SessionWriteFailed(_) => StatusCode::BAD_GATEWAY,
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Signed-in teller extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthTeller {
    pub session: TellerSession,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthTeller
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        let app_state = AppState::from_ref(state);
        let session = app_state
            .sessions
            .get(token)
            .await
            .ok_or(ApiError::Unauthorized)?;

        Ok(Self { session, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: sign in, record the terminal session, set cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(request), _): ApiJson<LoginRequest>,
) -> Response {
    let outcome = match login_svc::login(
        state.identity.as_ref(),
        state.session_store.as_ref(),
        state.session_write,
        &request,
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(e) => return error_response(login_error_status(&e), &e),
    };

    let profile = outcome.profile;
    let token = state
        .sessions
        .create(profile.clone(), outcome.session.access_token)
        .await;

    tracing::debug!(session_recorded = outcome.session_recorded, "teller session created");

    let jar = jar.add(session_cookie(token, state.cookie_secure));
    (jar, Json(LoginResponse::to_dashboard(profile))).into_response()
}

/// `GET /api/auth/me`: return the current teller.
pub async fn me(auth: AuthTeller) -> Json<TellerProfile> {
    Json(auth.session.profile)
}

/// `POST /api/auth/logout`: drop the session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthTeller) -> impl IntoResponse {
    state.sessions.remove(&auth.token).await;
    if let Err(e) = state.identity.sign_out(&auth.session.access_token).await {
        tracing::warn!(error = %e, "provider sign-out failed");
    }
    tracing::info!(terminal_id = %auth.session.profile.terminal_id, "teller signed out");

    let jar = CookieJar::new().add(cleared_session_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
