//! Wall-clock seconds for session expiry checks.

/// Current time as seconds since the Unix epoch.
#[cfg(feature = "hydrate")]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Current time as seconds since the Unix epoch.
#[cfg(not(feature = "hydrate"))]
#[must_use]
pub fn now_secs() -> i64 {
    let Ok(dur) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_secs()).unwrap_or(0)
}
