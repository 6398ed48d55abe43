//! Per-controller request sequencing.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared by every controller, so a completion that outlives its controller
/// never matches the sequence of a replacement.
static NEXT_SEQ: AtomicU64 = AtomicU64::new(1);

/// Monotonic request counter.
///
/// Every fetch a controller starts is tagged with the number returned by
/// [`issue`](Self::issue). Only the completion carrying the latest number
/// may touch state; anything older lost the race to a newer request.
/// Numbers are unique across all sequences in the process.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new request; it becomes the latest.
    pub fn issue(&mut self) -> u64 {
        self.latest = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
        self.latest
    }

    /// Number of the most recently issued request (0 before any).
    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_increasing_numbers() {
        let mut seq = RequestSequence::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert_eq!(seq.latest(), b);
    }

    #[test]
    fn only_latest_matches() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        assert!(seq.is_latest(first));
        let second = seq.issue();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn sequences_never_share_numbers() {
        let mut a = RequestSequence::new();
        let mut b = RequestSequence::new();
        let from_a = a.issue();
        let from_b = b.issue();
        assert_ne!(from_a, from_b);
        assert!(!b.is_latest(from_a));
    }

    #[test]
    fn nothing_matches_before_first_issue() {
        let seq = RequestSequence::new();
        assert!(!seq.is_latest(0));
    }
}
