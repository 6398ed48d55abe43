//! Generic HTTP client tools
//!
//! Sending, logging and classifying a single request. Retrying is layered on
//! top by [`RetryPolicy`](crate::RetryPolicy).
//!
//! # design principles
//! - **Read headers before the body** - `retry-after` must be captured before the response is consumed
//! - **Classification is pure** - status → outcome mapping works on a [`RawResponse`] and needs no network
//! - **Every suspend point is cancellable** - sending and reading the body race the cancel token

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::cancel::CancelToken;
use crate::error::{ClientError, Result};
use crate::types::Resource;
use crate::utils::log_sanitizer::truncate_for_log;

/// Status, rate-limit hint and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub retry_after: Option<u64>,
    pub body: String,
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the raw response
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor
    /// * `cancel` - aborts the send and the body read
    /// * `label` - request description for logging (such as "GET /employees")
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - any HTTP status, including error statuses
    /// * `Err(ClientError::Network | Timeout | Cancelled)` - no usable response
    pub async fn execute_request(
        request_builder: RequestBuilder,
        cancel: &CancelToken,
        label: &str,
    ) -> Result<RawResponse> {
        log::debug!("{label}");

        let response = cancel
            .run(async {
                request_builder.send().await.map_err(|e| {
                    if e.is_timeout() {
                        ClientError::Timeout {
                            detail: e.to_string(),
                        }
                    } else {
                        ClientError::Network {
                            detail: e.to_string(),
                        }
                    }
                })
            })
            .await?;

        let status = response.status().as_u16();
        log::debug!("{label} -> {status}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = parse_retry_after(
            response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok()),
        );

        let body = cancel
            .run(async {
                response.text().await.map_err(|e| ClientError::Network {
                    detail: format!("Failed to read response body: {e}"),
                })
            })
            .await?;

        log::debug!("{label} body: {}", truncate_for_log(&body));

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }

    /// Map a raw response to a body or a classified error.
    ///
    /// * 2xx → body
    /// * 404 → `NotFound` carrying the requested id
    /// * 429 → `RateLimited` carrying the `retry-after` hint
    /// * anything else → `UnexpectedStatus`
    pub fn classify(resource: &Resource, raw: RawResponse) -> Result<String> {
        match raw.status {
            200..=299 => Ok(raw.body),
            404 => Err(ClientError::NotFound {
                id: resource.not_found_id(),
            }),
            429 => {
                log::warn!(
                    "Rate limited (HTTP 429) on {}, retry_after={:?}",
                    resource.path(),
                    raw.retry_after
                );
                Err(ClientError::RateLimited {
                    retry_after: raw.retry_after,
                })
            }
            status => {
                let body = truncate_for_log(&raw.body);
                log::error!("Unexpected HTTP {status} on {}: {body}", resource.path());
                Err(ClientError::UnexpectedStatus { status, body })
            }
        }
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, label: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{label}] JSON parse failed: {e}");
            log::error!("[{label}] Raw response: {}", truncate_for_log(response_text));
            ClientError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// `retry-after` in integer seconds; anything else (HTTP dates, garbage) is ignored.
fn parse_retry_after(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse::<u64>().ok())
}
