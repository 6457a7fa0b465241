use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::test_support::{RecordingTransport, body_json, client_with, token_with_claims};

const NOW: i64 = 1_800_000_000;

fn instructor_token(exp: i64) -> String {
    token_with_claims(&json!({
        "id": "u-42",
        "role": "instructor",
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "exp": exp,
        "iat": exp - 3600
    }))
}

fn signin_request() -> SigninRequest {
    SigninRequest { email: "grace@example.com".to_owned(), password: "pw".to_owned() }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_signed_out_and_settled() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role(), None);
}

#[test]
fn hydrating_state_is_loading() {
    let state = AuthState::hydrating();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// SessionUser
// =============================================================

#[test]
fn session_user_reads_identity_and_expiry() {
    let user = SessionUser::from_token(&instructor_token(NOW + 60)).expect("user");
    assert_eq!(user.id.as_deref(), Some("u-42"));
    assert_eq!(user.role, Some(Role::Instructor));
    assert_eq!(user.role_name, "instructor");
    assert_eq!(user.expires_at, Some(NOW + 60));
    assert_eq!(user.display_name(), "Grace Hopper");
}

#[test]
fn session_user_falls_back_to_sub_for_id() {
    let token = token_with_claims(&json!({ "sub": "u-7", "role": "student" }));
    let user = SessionUser::from_token(&token).expect("user");
    assert_eq!(user.id.as_deref(), Some("u-7"));
    assert_eq!(user.display_name(), "me");
}

#[test]
fn session_user_keeps_unknown_role_string() {
    let token = token_with_claims(&json!({ "id": "u-1", "role": "moderator" }));
    let user = SessionUser::from_token(&token).expect("user");
    assert_eq!(user.role_name, "moderator");
    assert_eq!(user.role, None);
}

#[test]
fn session_user_accepts_numeric_ids() {
    let token = token_with_claims(&json!({ "id": 42, "role": "admin" }));
    assert_eq!(SessionUser::from_token(&token).expect("user").id.as_deref(), Some("42"));

    let token = token_with_claims(&json!({ "sub": 7, "role": "student" }));
    assert_eq!(SessionUser::from_token(&token).expect("user").id.as_deref(), Some("7"));
}

#[test]
fn session_user_treats_null_role_as_unknown() {
    let token = token_with_claims(&json!({ "id": "u-1", "role": null }));
    let user = SessionUser::from_token(&token).expect("user");
    assert_eq!(user.role_name, "");
    assert_eq!(user.role, None);
}

#[test]
fn session_user_reads_fractional_exp() {
    let token = token_with_claims(&json!({ "exp": 1_999_999_999.0 }));
    let user = SessionUser::from_token(&token).expect("user");
    assert_eq!(user.expires_at, Some(1_999_999_999));
    assert!(!user.is_expired(NOW));
}

#[test]
fn log_label_omits_name_and_email() {
    let user = SessionUser::from_token(&instructor_token(NOW + 60)).expect("user");
    let label = user.log_label();
    assert_eq!(label, r#"role="instructor""#);
    assert!(!label.contains("Grace"));
    assert!(!label.contains("grace@example.com"));
}

#[test]
fn session_user_rejects_malformed_token() {
    assert!(SessionUser::from_token("not-a-token").is_none());
}

// =============================================================
// TokenStore
// =============================================================

#[test]
fn memory_store_saves_loads_and_clears() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load(), None);
    store.save("t1");
    assert_eq!(store.load().as_deref(), Some("t1"));
    store.clear();
    assert_eq!(store.load(), None);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn restore_without_token_is_signed_out() {
    let store = MemoryTokenStore::default();
    assert_eq!(restore(&store, NOW), AuthState::default());
}

#[test]
fn restore_with_live_token_is_authenticated() {
    let token = instructor_token(NOW + 3600);
    let store = MemoryTokenStore::with_token(&token);

    let state = restore(&store, NOW);

    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some(token.as_str()));
    assert_eq!(state.role(), Some(Role::Instructor));
}

#[test]
fn restore_clears_expired_token() {
    let store = MemoryTokenStore::with_token(&instructor_token(NOW - 1));

    let state = restore(&store, NOW);

    assert!(!state.is_authenticated());
    assert_eq!(store.load(), None);
}

#[test]
fn restore_clears_malformed_token() {
    let store = MemoryTokenStore::with_token("garbage");

    let state = restore(&store, NOW);

    assert!(!state.is_authenticated());
    assert_eq!(store.load(), None);
}

#[test]
fn sign_in_persists_token_and_returns_session() {
    let token = instructor_token(NOW + 3600);
    let transport = RecordingTransport::replying(200, json!({ "status": "ok", "token": token }));
    let client = client_with(&transport);
    let store = MemoryTokenStore::default();

    let state = block_on(sign_in(&client, &store, &signin_request(), NOW)).expect("signed in");

    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Instructor));
    assert_eq!(store.load().as_deref(), Some(token.as_str()));
    assert_eq!(body_json(&transport.only_request()), json!({ "email": "grace@example.com", "password": "pw" }));
}

#[test]
fn sign_in_accepts_token_with_numeric_id() {
    let token = token_with_claims(&json!({ "id": 42, "role": "admin", "exp": NOW + 3600 }));
    let transport = RecordingTransport::replying(200, json!({ "status": "ok", "token": token }));
    let client = client_with(&transport);
    let store = MemoryTokenStore::default();

    let state = block_on(sign_in(&client, &store, &signin_request(), NOW)).expect("signed in");

    assert_eq!(state.role(), Some(Role::Admin));
    assert_eq!(state.user.and_then(|u| u.id).as_deref(), Some("42"));
}

#[test]
fn sign_in_without_token_is_an_error() {
    let transport = RecordingTransport::replying(200, json!({ "status": "ok", "message": "check your email" }));
    let client = client_with(&transport);
    let store = MemoryTokenStore::default();

    let err = block_on(sign_in(&client, &store, &signin_request(), NOW)).unwrap_err();

    assert_eq!(err, SessionError::MissingToken);
    assert_eq!(store.load(), None);
}

#[test]
fn sign_in_with_malformed_token_is_an_error() {
    let transport = RecordingTransport::replying(200, json!({ "status": "ok", "token": "a.b" }));
    let client = client_with(&transport);
    let store = MemoryTokenStore::default();

    let err = block_on(sign_in(&client, &store, &signin_request(), NOW)).unwrap_err();

    assert_eq!(err, SessionError::MalformedToken);
    assert_eq!(store.load(), None);
}

#[test]
fn sign_in_with_expired_token_is_an_error() {
    let transport = RecordingTransport::replying(200, json!({ "status": "ok", "token": instructor_token(NOW) }));
    let client = client_with(&transport);
    let store = MemoryTokenStore::default();

    let err = block_on(sign_in(&client, &store, &signin_request(), NOW)).unwrap_err();

    assert_eq!(err, SessionError::ExpiredToken);
}

#[test]
fn sign_in_propagates_api_errors() {
    let transport = RecordingTransport::replying(
        401,
        json!({ "statusCode": 401, "message": "Invalid credentials", "errorCode": "INVALID_CREDENTIALS" }),
    );
    let client = client_with(&transport);
    let store = MemoryTokenStore::default();

    let err = block_on(sign_in(&client, &store, &signin_request(), NOW)).unwrap_err();

    let SessionError::Api(api) = err else { panic!("expected api error") };
    assert_eq!(api.error_code(), "INVALID_CREDENTIALS");
}

#[test]
fn sign_out_clears_store() {
    let store = MemoryTokenStore::with_token("t1");
    let state = sign_out(&store);
    assert_eq!(state, AuthState::default());
    assert_eq!(store.load(), None);
}

#[test]
fn teardown_only_happens_after_expiry() {
    let token = instructor_token(NOW + 10);
    let store = MemoryTokenStore::with_token(&token);
    let state = restore(&store, NOW);

    assert!(teardown_if_expired(&state, &store, NOW + 9).is_none());
    assert_eq!(store.load().as_deref(), Some(token.as_str()));

    let replaced = teardown_if_expired(&state, &store, NOW + 10).expect("teardown");
    assert!(!replaced.is_authenticated());
    assert_eq!(store.load(), None);
}

#[test]
fn teardown_ignores_signed_out_state() {
    let store = MemoryTokenStore::default();
    assert!(teardown_if_expired(&AuthState::default(), &store, NOW).is_none());
}
