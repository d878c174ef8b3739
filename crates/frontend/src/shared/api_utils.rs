//! API utilities for frontend-backend communication
//!
//! Resolves the pairs endpoint from browser storage and the embedded config.

use contracts::shared::config::UploaderConfig;

/// localStorage key that overrides the configured pairs endpoint
pub const PAIRS_ENDPOINT_KEY: &str = "pairs_endpoint";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Get the base URL for API requests
///
/// Built from the current window location, port 8000 for the pairing service.
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Absolute URLs are kept, paths are joined to `base`
pub fn join_endpoint(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}

/// Endpoint for posting parsed rows
///
/// Search order:
/// 1. `localStorage["pairs_endpoint"]`
/// 2. Embedded default config
pub fn pairs_endpoint() -> String {
    let stored = storage().and_then(|s| s.get_item(PAIRS_ENDPOINT_KEY).ok().flatten());
    if stored.is_some() {
        log::debug!("Using pairs endpoint from localStorage");
    }
    let endpoint = UploaderConfig::embedded().pairs_endpoint_or(stored.as_deref());
    join_endpoint(&api_base(), &endpoint)
}
