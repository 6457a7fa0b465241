//! JSON-over-HTTP client for the LearnHub backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every service call goes through [`ApiClient::send`]: the path is resolved
//! against the configured base URL, the bearer token and JSON body are
//! attached, and non-2xx responses become [`ApiError::Status`] with the
//! backend's `statusCode` / `message` / `errorCode`.
//!
//! Client-side (hydrate): requests go through `gloo-net`.
//! Server-side (SSR): requests go through `reqwest`.
//! Neither feature: a stub transport that reports the API as unavailable.
//!
//! Each call is a single request. There are no retries, no caching and no
//! cancellation of superseded requests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use contracts::ApiErrorBody;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;

pub const FALLBACK_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Error surfaced by every API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success HTTP status.
    #[error("{message} (status {status_code}, {error_code})")]
    Status { status_code: u16, message: String, error_code: String },

    /// The request never produced a response (network failure, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// A success response body could not be parsed as the expected type.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The request body could not be serialized.
    #[error("request serialize failed: {0}")]
    Serialize(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// No transport exists for this build target.
    #[error("API not available in this environment")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` for every other variant.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Machine-readable code: the backend's `errorCode`, or a fixed `E_*` code.
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Status { error_code, .. } => error_code,
            Self::Transport(_) => "E_TRANSPORT",
            Self::Parse(_) => "E_PARSE",
            Self::Serialize(_) => "E_SERIALIZE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Unavailable => "E_UNAVAILABLE",
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Text suitable for showing next to a form: the backend's own message
    /// for status errors, a generic line otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Transport(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
            Self::Parse(_) | Self::Serialize(_) | Self::HttpClientBuild(_) => self.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// REQUEST DESCRIPTION
// =============================================================================

/// A logical API call: method, path under the API root, optional bearer
/// token and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub token: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), token: None, body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a bearer credential.
    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.token = Some(token.to_owned());
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialize`] if `body` cannot be represented as JSON.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

// =============================================================================
// TRANSPORT SEAM
// =============================================================================

/// A fully resolved HTTP request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw status and body returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Environment-specific HTTP executor. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Execute one request and return its raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response was received.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser transport over `fetch`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Server-render transport over `reqwest`.
#[cfg(feature = "ssr")]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl ReqwestTransport {
    /// Build a pooled client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend fails to initialise.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(std::time::Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[cfg(feature = "ssr")]
#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let resp = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Transport for builds with neither `hydrate` nor `ssr`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTransport;

#[async_trait::async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Stand-in for a 2xx response without a body (e.g. `204 No Content`): a
/// bare acknowledgement envelope.
const EMPTY_SUCCESS_BODY: &str = r#"{"status":"no_content"}"#;

/// Cheaply clonable handle shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.config.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Client for the current build target, configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the server-side HTTP client
    /// cannot be constructed.
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ApiConfig::from_env();
        let transport = default_transport(&config)?;
        Ok(Self::new(config, transport))
    }

    /// Issue one request and parse the 2xx JSON body as `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Status`] for non-2xx responses
    /// - [`ApiError::Transport`] when no response was received
    /// - [`ApiError::Parse`] when the success body does not match `T`
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        log::debug!("api request: {method} {path}");

        let http_request = self.resolve(request)?;
        let response = self.transport.execute(http_request).await?;

        if !response.is_success() {
            let err = status_error(response.status, &response.body);
            log::warn!("api error: {method} {path} -> {err}");
            return Err(err);
        }
        let body = if response.body.trim().is_empty() { EMPTY_SUCCESS_BODY } else { response.body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn resolve(&self, request: ApiRequest) -> Result<HttpRequest, ApiError> {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(token) = &request.token {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        let body = match &request.body {
            Some(value) => {
                headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
                Some(serde_json::to_string(value).map_err(|e| ApiError::Serialize(e.to_string()))?)
            }
            None => None,
        };
        Ok(HttpRequest { method: request.method, url: self.config.url(&request.path), headers, body })
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::unnecessary_wraps)]
fn default_transport(_config: &ApiConfig) -> Result<Arc<dyn Transport>, ApiError> {
    Ok(Arc::new(GlooTransport))
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
fn default_transport(config: &ApiConfig) -> Result<Arc<dyn Transport>, ApiError> {
    Ok(Arc::new(ReqwestTransport::new(config)?))
}

#[cfg(not(any(feature = "hydrate", feature = "ssr")))]
#[allow(clippy::unnecessary_wraps)]
fn default_transport(_config: &ApiConfig) -> Result<Arc<dyn Transport>, ApiError> {
    Ok(Arc::new(UnavailableTransport))
}

/// Map a non-2xx response to [`ApiError::Status`], tolerating bodies that are
/// empty, not JSON, or missing fields.
fn status_error(status: u16, body: &str) -> ApiError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    ApiError::Status {
        status_code: status,
        message: parsed.message.unwrap_or_else(|| format!("request failed with status {status}")),
        error_code: parsed.error_code.unwrap_or_else(|| FALLBACK_ERROR_CODE.to_owned()),
    }
}
