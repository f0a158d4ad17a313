//! Build-time client configuration.
//!
//! The browser bundle has no process environment, so settings are read from
//! the build environment with `option_env!` and fall back to local defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use reviews::ReviewScope;

/// Backend base URL used when `REVIEW_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// How long a banner message stays up before clearing itself.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);
/// Delay before loading the next snippet after a successful submission.
pub const NEXT_SNIPPET_DELAY: Duration = Duration::from_secs(2);
/// Delay before loading a replacement when the reviewed snippet vanished.
pub const REPLACEMENT_SNIPPET_DELAY: Duration = Duration::from_secs(3);

/// REST base URL without a trailing slash.
#[must_use]
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("REVIEW_API_URL"))
}

/// Which snippet-request variant the reviewer page uses.
#[must_use]
pub fn review_scope() -> ReviewScope {
    option_env!("REVIEW_SCOPE").map_or_else(ReviewScope::default, ReviewScope::from_setting)
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    raw.trim_end_matches('/').to_owned()
}
