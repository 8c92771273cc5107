//! API endpoint configuration derived from the page origin.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin UI is served from the same host as the REST API. Over TLS the
//! API sits behind the default port; in plain-HTTP development setups it
//! listens on `INSECURE_API_PORT`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API port used when the page is not served over `https:`.
pub const INSECURE_API_PORT: u16 = 8080;

const SECURE_PROTOCOL: &str = "https:";

/// Base URL for every REST call made by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Use an explicit base URL. A single trailing slash is enforced.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/');
        Self { base_url: format!("{trimmed}/") }
    }

    /// Build the base URL from `location.protocol` and `location.hostname`.
    ///
    /// `protocol` includes the trailing colon, as the browser reports it.
    pub fn from_location(protocol: &str, hostname: &str) -> Self {
        let port = if protocol == SECURE_PROTOCOL { String::new() } else { format!(":{INSECURE_API_PORT}") };
        Self::new(format!("{protocol}//{hostname}{port}"))
    }

    /// Read the current page origin from `window.location`.
    ///
    /// Falls back to `http://localhost` when no window is available.
    #[cfg(feature = "csr")]
    pub fn from_window() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let protocol = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_else(|| "http:".to_owned());
        let hostname = location
            .as_ref()
            .and_then(|l| l.hostname().ok())
            .unwrap_or_else(|| "localhost".to_owned());
        Self::from_location(&protocol, &hostname)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a relative API path (e.g. `v1/projects`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}
