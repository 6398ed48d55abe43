//! Log sanitization utilities
//!
//! Response bodies from the employee service can be large (the full
//! collection) or arbitrary HTML error pages; only a bounded prefix is logged.

/// Maximum number of bytes of a body included in log output.
const BODY_LOG_LIMIT: usize = 512;

/// Largest char boundary not after `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned unchanged; longer bodies keep their
/// first `BODY_LOG_LIMIT` bytes (on a char boundary) followed by the total size.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= BODY_LOG_LIMIT {
        body.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &body[..floor_char_boundary(body, BODY_LOG_LIMIT)],
            body.len()
        )
    }
}
