//! Backend connection settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser builds bake `LEARNHUB_API_URL` in at compile time; server and native
//! builds read it at startup. Either way the base URL is normalised once here
//! so request paths can be joined without double or missing slashes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_ENV: &str = "LEARNHUB_API_URL";
pub const DEFAULT_API_BASE_URL: &str = "https://api.learnhub.app/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub timeouts: ApiTimeouts,
}

impl ApiConfig {
    /// Config for an explicit base URL with default timeouts.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(Some(base_url)), timeouts: ApiTimeouts::default() }
    }

    /// Build config from the environment.
    ///
    /// - `LEARNHUB_API_URL`: backend base URL, default [`DEFAULT_API_BASE_URL`]
    /// - `LEARNHUB_REQUEST_TIMEOUT_SECS`: default 30 (server builds only)
    /// - `LEARNHUB_CONNECT_TIMEOUT_SECS`: default 10 (server builds only)
    #[must_use]
    pub fn from_env() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self {
                base_url: normalize_base_url(option_env!("LEARNHUB_API_URL")),
                timeouts: ApiTimeouts::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let raw = std::env::var(API_URL_ENV).ok();
            let timeouts = ApiTimeouts {
                request_secs: env_parse_u64("LEARNHUB_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse_u64("LEARNHUB_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            };
            Self { base_url: normalize_base_url(raw.as_deref()), timeouts }
        }
    }

    /// Join `path` onto the base URL with exactly one `/` between them.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(not(feature = "hydrate"))]
fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
