//! 用户可见的错误文案
//!
//! Controllers turn every [`ClientError`] into one of these fixed strings.

use employee_directory_client::ClientError;

pub const LIST_FETCH_FAILED: &str = "Error fetching employees. Please try again later.";
pub const SEARCH_FAILED: &str = "Error searching employee. Please try again later.";
pub const DETAIL_FETCH_FAILED: &str = "Error fetching employee details. Please try again later.";
pub const TOO_MANY_REQUESTS: &str = "Too many requests. Please try again later.";

/// `Employee with ID {id} not found.`
pub fn not_found(id: &str) -> String {
    format!("Employee with ID {id} not found.")
}

/// Message for a failed fetch-all.
pub fn for_list(err: &ClientError) -> String {
    match err {
        ClientError::RetryExhausted { .. } => TOO_MANY_REQUESTS.to_string(),
        _ => LIST_FETCH_FAILED.to_string(),
    }
}

/// Message for a failed search; `query` is echoed verbatim on 404.
pub fn for_search(query: &str, err: &ClientError) -> String {
    match err {
        ClientError::NotFound { .. } => not_found(query),
        ClientError::RetryExhausted { .. } => TOO_MANY_REQUESTS.to_string(),
        _ => SEARCH_FAILED.to_string(),
    }
}

/// Message for a failed detail fetch.
pub fn for_detail(id: &str, err: &ClientError) -> String {
    match err {
        ClientError::NotFound { .. } => not_found(id),
        ClientError::RetryExhausted { .. } => TOO_MANY_REQUESTS.to_string(),
        _ => DETAIL_FETCH_FAILED.to_string(),
    }
}

/// Expected outcomes are logged at `warn`, everything else at `error`.
pub(crate) fn log_failure(context: &str, err: &ClientError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
