//! Client configuration: API endpoint, request timeout, and credentials.

use std::time::Duration;

/// Production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.hetzner.cloud";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings consumed by [`crate::Client`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without trailing slash. Endpoint paths (`/v1/...`) are appended to it.
    pub endpoint: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
    pub user_agent: String,
    /// Upper bound on pages fetched by the `get_all_*` helpers.
    /// `None` keeps fetching until the API reports the last page.
    pub max_pages: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
            max_pages: None,
        }
    }
}

impl ClientConfig {
    /// Builds a config from the environment, falling back to defaults:
    ///
    /// - `HCLOUD_ENDPOINT`: API base URL
    /// - `HCLOUD_TIMEOUT_SECS`: request timeout in seconds
    /// - `HCLOUD_MAX_PAGES`: page limit for the `get_all_*` helpers
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: std::env::var("HCLOUD_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_endpoint(&v))
                .unwrap_or(defaults.endpoint),
            timeout: env_u64("HCLOUD_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: defaults.user_agent,
            max_pages: env_u64("HCLOUD_MAX_PAGES")
                .and_then(page_limit)
                .or(defaults.max_pages),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = normalize_endpoint(endpoint);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Caps the `get_all_*` helpers at `max_pages` pages. `0` is raised to `1`.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages.max(1));
        self
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim().trim_end_matches('/').to_string()
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a non-negative integer", key, raw);
            None
        }
    }
}

fn page_limit(value: u64) -> Option<u32> {
    match u32::try_from(value) {
        Ok(0) | Err(_) => {
            tracing::warn!("Ignoring HCLOUD_MAX_PAGES={}: expected 1..={}", value, u32::MAX);
            None
        }
        Ok(v) => Some(v),
    }
}

/// Source of the bearer token sent with every request.
///
/// Called once per request, so implementations may rotate the token.
pub trait TokenSupplier: Send + Sync {
    fn token(&self) -> String;
}

impl<F> TokenSupplier for F
where
    F: Fn() -> String + Send + Sync,
{
    fn token(&self) -> String {
        self()
    }
}

impl TokenSupplier for String {
    fn token(&self) -> String {
        self.clone()
    }
}

impl TokenSupplier for &'static str {
    fn token(&self) -> String {
        (*self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://api.hetzner.cloud");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("hcloud_api/"));
        assert_eq!(config.max_pages, None);
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let config = ClientConfig::default()
            .with_endpoint("http://localhost:8080/")
            .with_timeout(Duration::from_secs(5))
            .with_max_pages(10);
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_pages, Some(10));
    }

    #[test]
    fn page_limit_rejects_zero_and_overflow() {
        assert_eq!(page_limit(0), None);
        assert_eq!(page_limit(u64::from(u32::MAX) + 1), None);
        assert_eq!(page_limit(3), Some(3));
        assert_eq!(ClientConfig::default().with_max_pages(0).max_pages, Some(1));
    }

    #[test]
    fn token_suppliers() {
        let from_closure = || "rotating".to_string();
        assert_eq!(from_closure.token(), "rotating");
        assert_eq!("static".token(), "static");
        assert_eq!("owned".to_string().token(), "owned");
    }
}
