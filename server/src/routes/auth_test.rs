use std::marker::PhantomData;

use axum::body::{Body, to_bytes};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::{Request, header};
use teller::ErrorBody;

use super::*;
use crate::services::login::SessionWritePolicy;
use crate::services::supabase::SupabaseError;
use crate::state::test_helpers::{StubIdentity, StubStore, test_app_state};

fn request(terminal_id: &str, username: &str, password: &str) -> LoginRequest {
    LoginRequest { terminal_id: terminal_id.into(), username: username.into(), password: password.into() }
}

fn json<T>(value: T) -> ApiJson<T> {
    WithRejection(Json(value), PhantomData)
}

async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

fn token_from_set_cookie(raw: &str) -> String {
    raw.split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("teller_session="))
        .unwrap_or_default()
        .to_owned()
}

// =============================================================================
// POST /api/auth/login
// =============================================================================

#[tokio::test]
async fn successful_login_redirects_to_dashboard() {
    let state = test_app_state(StubIdentity::ok(), StubStore::ok(), SessionWritePolicy::BestEffort);
    let resp = login(
        State(state.clone()),
        CookieJar::new(),
        json(request("T01", "teller1@example.com", "correct")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("teller_session="));
    assert!(cookie.contains("HttpOnly"));

    let body: LoginResponse = body_json(resp).await;
    assert_eq!(body.redirect, "/dashboard");
    assert_eq!(body.teller.terminal_id, "T01");
    assert_eq!(body.teller.teller_id, "T-3F2A9C1E7");

    let token = token_from_set_cookie(&cookie);
    let session = state.sessions.get(&token).await.unwrap();
    assert_eq!(session.profile, body.teller);
}

#[tokio::test]
async fn rejected_login_returns_provider_message() {
    let state = test_app_state(
        StubIdentity::rejecting("Invalid login credentials"),
        StubStore::ok(),
        SessionWritePolicy::BestEffort,
    );
    let resp = login(
        State(state.clone()),
        CookieJar::new(),
        json(request("T01", "teller1@example.com", "wrong")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&resp).is_empty());
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.message, "Invalid login credentials");
    assert_eq!(body.code, "E_CREDENTIALS_REJECTED");
    assert!(!body.retryable);
    assert_eq!(state.sessions.session_count().await, 0);
}

#[tokio::test]
async fn empty_field_is_bad_request_without_provider_call() {
    let identity = StubIdentity::ok();
    let state = test_app_state(identity.clone(), StubStore::ok(), SessionWritePolicy::BestEffort);
    let resp = login(State(state), CookieJar::new(), json(request("", "teller1@example.com", "correct"))).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.message, "All fields are required");
    assert_eq!(identity.calls(), 0);
}

#[tokio::test]
async fn required_session_write_failure_is_bad_gateway() {
    let store = StubStore::failing(SupabaseError::Request("timeout".into()));
    let state = test_app_state(StubIdentity::ok(), store, SessionWritePolicy::Required);
    let resp = login(
        State(state.clone()),
        CookieJar::new(),
        json(request("T01", "teller1@example.com", "correct")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.code, "E_SESSION_WRITE_FAILED");
    assert!(body.retryable);
    assert_eq!(state.sessions.session_count().await, 0);
}

#[tokio::test]
async fn best_effort_session_write_failure_still_logs_in() {
    let store = StubStore::failing(SupabaseError::Request("timeout".into()));
    let state = test_app_state(StubIdentity::ok(), store, SessionWritePolicy::BestEffort);
    let resp = login(
        State(state),
        CookieJar::new(),
        json(request("T01", "teller1@example.com", "correct")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_login_body_is_error_body() {
    let req = Request::builder()
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"terminal_id": 5}"#))
        .unwrap();
    let Err(rejection) = ApiJson::<LoginRequest>::from_request(req, &()).await else {
        panic!("wrong-typed field should be rejected");
    };

    let resp = rejection.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.code, "E_BAD_REQUEST");
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn non_json_login_body_is_error_body() {
    let req = Request::builder().method("POST").body(Body::from("terminal=T01")).unwrap();
    let Err(rejection) = ApiJson::<LoginRequest>::from_request(req, &()).await else {
        panic!("missing content type should be rejected");
    };
    let body: ErrorBody = body_json(rejection.into_response()).await;
    assert_eq!(body.code, "E_BAD_REQUEST");
}

#[test]
fn login_error_status_mapping() {
    assert_eq!(login_error_status(&LoginError::MissingFields), StatusCode::BAD_REQUEST);
    assert_eq!(
        login_error_status(&LoginError::CredentialsRejected("x".into())),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(login_error_status(&LoginError::ProviderUnavailable), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// AuthTeller extractor
// =============================================================================

#[tokio::test]
async fn extractor_requires_cookie() {
    let state = test_app_state(StubIdentity::ok(), StubStore::ok(), SessionWritePolicy::BestEffort);
    let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();
    let result = AuthTeller::from_request_parts(&mut parts, &state).await;
    assert_eq!(result.err(), Some(ApiError::Unauthorized));
}

#[tokio::test]
async fn extractor_rejection_is_unauthorized_error_body() {
    let state = test_app_state(StubIdentity::ok(), StubStore::ok(), SessionWritePolicy::BestEffort);
    let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();
    let Err(rejection) = AuthTeller::from_request_parts(&mut parts, &state).await else {
        panic!("request without cookie should be rejected");
    };

    let resp = rejection.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.code, "E_UNAUTHORIZED");
    assert!(!body.retryable);
}

#[tokio::test]
async fn extractor_rejects_unknown_token() {
    let state = test_app_state(StubIdentity::ok(), StubStore::ok(), SessionWritePolicy::BestEffort);
    let (mut parts, ()) = Request::builder()
        .header(header::COOKIE, "teller_session=deadbeef")
        .body(())
        .unwrap()
        .into_parts();
    let result = AuthTeller::from_request_parts(&mut parts, &state).await;
    assert_eq!(result.err(), Some(ApiError::Unauthorized));
}

#[tokio::test]
async fn extractor_resolves_live_session() {
    let state = test_app_state(StubIdentity::ok(), StubStore::ok(), SessionWritePolicy::BestEffort);
    let profile = TellerProfile::new("u1", None, "T07");
    let token = state.sessions.create(profile.clone(), "jwt".into()).await;
    let (mut parts, ()) = Request::builder()
        .header(header::COOKIE, format!("teller_session={token}"))
        .body(())
        .unwrap()
        .into_parts();
    let auth = AuthTeller::from_request_parts(&mut parts, &state).await.unwrap();
    assert_eq!(auth.token, token);
    assert_eq!(auth.session.profile, profile);
}

// =============================================================================
// me / logout
// =============================================================================

#[tokio::test]
async fn me_returns_session_profile() {
    let state = test_app_state(StubIdentity::ok(), StubStore::ok(), SessionWritePolicy::BestEffort);
    let profile = TellerProfile::new("u1", None, "T07");
    let token = state.sessions.create(profile.clone(), "jwt".into()).await;
    let session = state.sessions.get(&token).await.unwrap();

    let Json(body) = me(AuthTeller { session, token }).await;
    assert_eq!(body, profile);
}

#[tokio::test]
async fn logout_removes_session_and_clears_cookie() {
    let identity = StubIdentity::ok();
    let state = test_app_state(identity.clone(), StubStore::ok(), SessionWritePolicy::BestEffort);
    let token = state
        .sessions
        .create(TellerProfile::new("u1", None, "T07"), "jwt".into())
        .await;
    let session = state.sessions.get(&token).await.unwrap();

    let resp = logout(State(state.clone()), AuthTeller { session, token: token.clone() })
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(set_cookie(&resp).contains("Max-Age=0"));
    assert!(state.sessions.get(&token).await.is_none());
    assert_eq!(identity.sign_outs(), 1);
}
