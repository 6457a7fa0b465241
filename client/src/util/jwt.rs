//! Unverified decoding of compact session tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session layer reads role and identity out of the stored token without
//! a network round-trip. Signatures are not checked here and neither is
//! expiry; the backend verifies every token it receives.
//!
//! Browser builds decode base64 with `window.atob`; every other build uses the
//! `base64` crate. Both paths are padding-indifferent and yield the same bytes.
//!
//! ERROR HANDLING
//! ==============
//! Malformed input of any kind decodes to `None`. Callers treat that the same
//! as "not signed in".

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const STANDARD_PADDING_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded payload: caller-defined fields plus the registered time claims.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims<T> {
    #[serde(flatten)]
    pub custom: T,
    /// Expiry, seconds since the Unix epoch.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub exp: Option<i64>,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub iat: Option<i64>,
}

impl<T> Claims<T> {
    /// True once `now` (seconds since epoch) has reached `exp`.
    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        exp_reached(self.exp, now)
    }
}

/// Expiry rule shared by every holder of an `exp` value: expired once `now`
/// reaches `exp`; no `exp` never expires.
#[must_use]
pub fn exp_reached(exp: Option<i64>, now: i64) -> bool {
    exp.is_some_and(|exp| exp <= now)
}

/// NumericDate reader: integers, fractional seconds (truncated toward zero),
/// and numeric strings. Anything else, `null` included, reads as absent.
#[allow(clippy::cast_possible_truncation)]
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let seconds = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64),
        _ => None,
    };
    Ok(seconds)
}

/// Decode the payload segment of `token` into [`Claims<T>`].
///
/// Returns `None` unless the token has exactly three dot-separated segments
/// and the middle one is URL-safe base64 of UTF-8 JSON matching `T`.
#[must_use]
pub fn decode<T: DeserializeOwned>(token: &str) -> Option<Claims<T>> {
    let text = decode_payload_text(token)?;
    match serde_json::from_str(&text) {
        Ok(claims) => Some(claims),
        Err(e) => {
            log::debug!("token payload is not valid claims JSON: {e}");
            None
        }
    }
}

/// Decode the payload segment of `token` to its UTF-8 JSON text.
#[must_use]
pub fn decode_payload_text(token: &str) -> Option<String> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        log::debug!("token has {} segments, expected 3", segments.len());
        return None;
    };
    let standard = payload.replace('-', "+").replace('_', "/");
    let Some(bytes) = decode_base64(&standard) else {
        log::debug!("token payload is not valid base64");
        return None;
    };
    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            log::debug!("token payload is not valid UTF-8: {e}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn decode_base64(input: &str) -> Option<Vec<u8>> {
    let Some(window) = web_sys::window() else {
        return decode_base64_portable(input);
    };
    // `atob` yields a binary string: one char per byte, each in 0..=255.
    let binary = window.atob(input).ok()?;
    binary.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect()
}

#[cfg(not(feature = "hydrate"))]
fn decode_base64(input: &str) -> Option<Vec<u8>> {
    decode_base64_portable(input)
}

fn decode_base64_portable(input: &str) -> Option<Vec<u8>> {
    STANDARD_PADDING_INDIFFERENT.decode(input).ok()
}
