//! Utility modules.

/// Lenient number decoding for fields the service sends as numbers or strings.
pub mod lenient;

/// Log sanitization utilities to keep response bodies out of logs in full.
pub mod log_sanitizer;
