use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all employee service operations.
///
/// # Retryable Errors
///
/// Only [`RateLimited`](Self::RateLimited) is retried. The REST client absorbs it
/// through its [`RetryPolicy`](crate::RetryPolicy); callers of
/// [`EmployeeApi`](crate::EmployeeApi) observe either the successful outcome or
/// [`RetryExhausted`](Self::RetryExhausted), never `RateLimited` itself.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The service answered HTTP 404 (or returned `data: null`) for the requested employee.
    #[error("Employee '{id}' not found")]
    NotFound {
        /// Identifier that was requested, verbatim.
        id: String,
    },

    /// The service answered HTTP 429.
    #[error("Rate limited{}", retry_hint(*.retry_after))]
    RateLimited {
        /// Value of the `retry-after` header in seconds, when present and parseable.
        retry_after: Option<u64>,
    },

    /// Every attempt allowed by the retry policy was rate limited.
    #[error("Rate limited after {attempts} attempts")]
    RetryExhausted {
        /// Number of attempts performed.
        attempts: u32,
        /// `retry-after` hint of the last 429 response.
        retry_after: Option<u64>,
    },

    /// Connection-level failure (DNS, refused connection, broken body stream).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// Any status other than 2xx, 404 and 429.
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the decode failure.
        detail: String,
    },

    /// The client could not be built from its configuration.
    #[error("Configuration error: {detail}")]
    Configuration {
        /// Details about the failure.
        detail: String,
    },

    /// The operation's cancel token fired before it completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// Whether the retry loop should try again after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// `retry-after` hint carried by a rate-limit error, in seconds.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after } | Self::RetryExhausted { retry_after, .. } => {
                *retry_after
            }
            _ => None,
        }
    }

    /// 是否为预期行为（资源不存在、主动取消），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Cancelled)
    }
}

fn retry_hint(retry_after: Option<u64>) -> String {
    retry_after.map_or_else(String::new, |secs| format!(" (retry after {secs}s)"))
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
