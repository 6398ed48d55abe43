//! Client configuration
//!
//! Defaults target the public dummy employee service; environment variables
//! override them:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `EMPLOYEE_API_BASE_URL` | `base_url` |
//! | `EMPLOYEE_API_MAX_ATTEMPTS` | `retry.max_attempts` |
//! | `EMPLOYEE_API_MAX_RETRY_DELAY_SECS` | `retry.max_delay` |

use std::time::Duration;

use crate::retry::RetryPolicy;

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://dummy.restapiexample.com/api/v1";
/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "EMPLOYEE_API_BASE_URL";
pub const ENV_MAX_ATTEMPTS: &str = "EMPLOYEE_API_MAX_ATTEMPTS";
pub const ENV_MAX_RETRY_DELAY_SECS: &str = "EMPLOYEE_API_MAX_RETRY_DELAY_SECS";

/// Connection and retry settings for [`RestEmployeeClient`](crate::RestEmployeeClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root without trailing slash, e.g. `https://host/api/v1`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Replace the base URL, trimming trailing slashes.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Apply overrides from any key/value source. Unparseable values are
    /// ignored with a warning.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self = self.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            match raw.trim().parse::<u32>() {
                Ok(n) => self.retry.max_attempts = n,
                Err(e) => log::warn!("Ignoring {ENV_MAX_ATTEMPTS}={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_RETRY_DELAY_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.retry.max_delay = Duration::from_secs(secs),
                Err(e) => log::warn!("Ignoring {ENV_MAX_RETRY_DELAY_SECS}={raw:?}: {e}"),
            }
        }

        self
    }

    /// Absolute URL for a request path such as `/employees`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.url_for("/employees"), format!("{DEFAULT_BASE_URL}/employees"));
    }

    #[test]
    fn overrides_apply() {
        let config = ClientConfig::default().with_overrides(lookup(&[
            (ENV_BASE_URL, "http://localhost:8080/api/"),
            (ENV_MAX_ATTEMPTS, "2"),
            (ENV_MAX_RETRY_DELAY_SECS, "9"),
        ]));
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.max_delay, Duration::from_secs(9));
    }

    #[test]
    fn invalid_overrides_ignored() {
        let config = ClientConfig::default().with_overrides(lookup(&[
            (ENV_BASE_URL, "   "),
            (ENV_MAX_ATTEMPTS, "many"),
            (ENV_MAX_RETRY_DELAY_SECS, "-3"),
        ]));
        assert_eq!(config, ClientConfig::default());
    }
}
