//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default upstream catalog address.
pub const DEFAULT_BASE_URL: &str = "https://leetcode.com";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the catalog service (no trailing slash)
    pub base_url: String,
    /// Overall timeout for every outbound request
    pub request_timeout: Duration,
    /// Lifetime of a cached problem
    pub problem_ttl: Duration,
    /// Period of the expired-entry sweep
    pub sweep_interval: Duration,
    /// Period of the token and index refresh
    pub refresh_interval: Duration,
    /// Lead time before token expiry at which renewal kicks in
    pub token_guard: Duration,
    /// HTTP server port for the lookup binary
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CATALOG_BASE_URL` - Catalog root URL (default: https://leetcode.com)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 10)
    /// - `PROBLEM_TTL` - Cached problem lifetime in seconds (default: 3600)
    /// - `SWEEP_INTERVAL` - Expired-entry sweep period in seconds (default: 60)
    /// - `REFRESH_INTERVAL` - Token/index refresh period in seconds (default: 3600)
    /// - `TOKEN_GUARD` - Token renewal lead time in seconds (default: 7200)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("CATALOG_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            request_timeout: nonzero_secs_from_env("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            problem_ttl: nonzero_secs_from_env("PROBLEM_TTL").unwrap_or(defaults.problem_ttl),
            sweep_interval: nonzero_secs_from_env("SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
            refresh_interval: nonzero_secs_from_env("REFRESH_INTERVAL")
                .unwrap_or(defaults.refresh_interval),
            token_guard: secs_from_env("TOKEN_GUARD").unwrap_or(defaults.token_guard),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Returns a copy of this config pointed at another catalog root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// GraphQL endpoint all catalog queries are posted to.
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// Referer sent with a problem-by-slug query.
    pub fn problem_referer(&self, slug: &str) -> String {
        format!("{}/problems/{}/description/", self.base_url, slug)
    }

    /// Referer sent with list, count and daily queries.
    pub fn problem_list_referer(&self) -> String {
        format!("{}/problemset/all/", self.base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            problem_ttl: Duration::from_secs(3600),
            sweep_interval: Duration::from_secs(60),
            refresh_interval: Duration::from_secs(3600),
            token_guard: Duration::from_secs(2 * 3600),
            server_port: 3000,
        }
    }
}

fn secs_from_env(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Like [`secs_from_env`], but a zero period falls back to the default.
fn nonzero_secs_from_env(name: &str) -> Option<Duration> {
    secs_from_env(name).filter(|d| !d.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://leetcode.com");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.problem_ttl, Duration::from_secs(3600));
        assert_eq!(config.sweep_interval, Duration::from_secs(60));
        assert_eq!(config.refresh_interval, Duration::from_secs(3600));
        assert_eq!(config.token_guard, Duration::from_secs(7200));
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CATALOG_BASE_URL");
        env::remove_var("REQUEST_TIMEOUT");
        env::remove_var("PROBLEM_TTL");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("REFRESH_INTERVAL");
        env::remove_var("TOKEN_GUARD");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.problem_ttl, Duration::from_secs(3600));
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_zero_periods_fall_back_to_defaults() {
        env::set_var("REQUEST_TIMEOUT", "0");
        env::set_var("PROBLEM_TTL", "0");
        env::set_var("SWEEP_INTERVAL", "0");
        env::set_var("REFRESH_INTERVAL", "0");

        let config = Config::from_env();

        env::remove_var("REQUEST_TIMEOUT");
        env::remove_var("PROBLEM_TTL");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("REFRESH_INTERVAL");

        let defaults = Config::default();
        assert_eq!(config.request_timeout, defaults.request_timeout);
        assert_eq!(config.problem_ttl, defaults.problem_ttl);
        assert_eq!(config.sweep_interval, defaults.sweep_interval);
        assert_eq!(config.refresh_interval, defaults.refresh_interval);
    }

    #[test]
    fn test_derived_urls() {
        let config = Config::default().with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.graphql_url(), "http://127.0.0.1:9000/graphql");
        assert_eq!(
            config.problem_referer("two-sum"),
            "http://127.0.0.1:9000/problems/two-sum/description/"
        );
        assert_eq!(
            config.problem_list_referer(),
            "http://127.0.0.1:9000/problemset/all/"
        );
    }
}
