//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware pages to coordinate redirects and
//! identity-dependent rendering. The session is a token plus the identity
//! decoded from it; it is restored from a [`TokenStore`] at startup, replaced
//! on sign-in, and torn down on sign-out or once the token's `exp` passes.
//!
//! The store is a trait so tests and server renders can use
//! [`MemoryTokenStore`] while the browser uses `localStorage`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::net::auth_service;
use crate::net::http::{ApiClient, ApiError};
use crate::net::types::{Role, SigninRequest};
use crate::util::jwt;

/// Errors from session transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Sign-in succeeded but the response carried no token.
    #[error("sign-in response did not include a session token")]
    MissingToken,

    /// The issued token could not be decoded.
    #[error("session token could not be decoded")]
    MalformedToken,

    /// The issued token is already past its expiry.
    #[error("session token has already expired")]
    ExpiredToken,
}

/// Claim shape this client reads from session tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Identifier claims arrive as strings or integers depending on the issuer.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Identity of the signed-in user, derived from token claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Raw role string as issued; empty when the token had none.
    pub role_name: String,
    /// Typed role, `None` for empty or unrecognised role strings.
    pub role: Option<Role>,
    pub expires_at: Option<i64>,
}

impl SessionUser {
    /// Decode the identity carried by `token`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let claims = jwt::decode::<SessionClaims>(token)?;
        let SessionClaims { id, sub, role, name, email } = claims.custom;
        let role = role.unwrap_or_default();
        Some(Self {
            id: id.or(sub),
            name,
            email,
            role: Role::parse(&role),
            role_name: role,
            expires_at: claims.exp,
        })
    }

    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        jwt::exp_reached(self.expires_at, now)
    }

    /// Identity summary safe for logs: the role only, never name or email.
    #[must_use]
    pub fn log_label(&self) -> String {
        format!("role={:?}", self.role_name)
    }

    /// Name to show in headers, falling back to email, then a placeholder.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "me".to_owned())
    }
}

/// Authentication state tracking the session and hydration status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    /// True until the persisted session has been read on the client.
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the persisted session has been restored.
    #[must_use]
    pub fn hydrating() -> Self {
        Self { token: None, user: None, loading: true }
    }

    #[must_use]
    pub fn authenticated(token: String, user: SessionUser) -> Self {
        Self { token: Some(token), user: Some(user), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }
}

// =============================================================================
// TOKEN STORAGE
// =============================================================================

/// Persistence for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Shared handle provided through Leptos context.
pub type SharedTokenStore = Arc<dyn TokenStore>;

/// In-process store used for server renders and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Browser `localStorage` store under [`crate::util::routes::TOKEN_STORAGE_KEY`].
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(crate::util::routes::TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(crate::util::routes::TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(crate::util::routes::TOKEN_STORAGE_KEY);
        }
    }
}

/// Store for the current build target.
#[must_use]
pub fn default_token_store() -> SharedTokenStore {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(LocalStorageTokenStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryTokenStore::default())
    }
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Rebuild the session from the persisted token.
///
/// A missing, undecodable, or expired token yields a signed-out state; the
/// latter two are also removed from the store.
pub fn restore(store: &dyn TokenStore, now: i64) -> AuthState {
    let Some(token) = store.load() else {
        return AuthState::default();
    };
    match SessionUser::from_token(&token) {
        Some(user) if !user.is_expired(now) => AuthState::authenticated(token, user),
        Some(_) => {
            log::warn!("stored session token expired; clearing");
            store.clear();
            AuthState::default()
        }
        None => {
            log::warn!("stored session token is malformed; clearing");
            store.clear();
            AuthState::default()
        }
    }
}

/// Sign in, persist the issued token, and return the new session.
///
/// # Errors
///
/// - [`SessionError::Api`] if the sign-in request fails
/// - [`SessionError::MissingToken`] if the response carries no token
/// - [`SessionError::MalformedToken`] if the token cannot be decoded
/// - [`SessionError::ExpiredToken`] if the token is already expired
pub async fn sign_in(
    client: &ApiClient,
    store: &dyn TokenStore,
    request: &SigninRequest,
    now: i64,
) -> Result<AuthState, SessionError> {
    let response = auth_service::signin(client, request).await?;
    let token = response.token.ok_or(SessionError::MissingToken)?;
    let user = SessionUser::from_token(&token).ok_or(SessionError::MalformedToken)?;
    if user.is_expired(now) {
        return Err(SessionError::ExpiredToken);
    }
    store.save(&token);
    log::info!("signed in: {}", user.log_label());
    Ok(AuthState::authenticated(token, user))
}

/// Drop the persisted token and return a signed-out state.
pub fn sign_out(store: &dyn TokenStore) -> AuthState {
    store.clear();
    AuthState::default()
}

/// Tear the session down if its token has expired by `now`.
///
/// Returns the replacement state when a teardown happened.
pub fn teardown_if_expired(state: &AuthState, store: &dyn TokenStore, now: i64) -> Option<AuthState> {
    let user = state.user.as_ref()?;
    if !user.is_expired(now) {
        return None;
    }
    log::warn!("session expired; signing out");
    Some(sign_out(store))
}
