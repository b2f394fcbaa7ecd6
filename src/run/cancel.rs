//! `CancelToken`: A latched cooperative stop flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable cancellation flag.
///
/// Any clone may set the flag from any thread at any time; the run-loop
/// polls it non-blockingly once per iteration. The flag latches: once
/// cancelled, a token never reads as live again.
///
/// The token is deliberately independent of any OS signal machinery, so a
/// test can exercise cancellation by pre-tripping a token it injects.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Poll whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_live() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn test_cancel_latches() {
        let token = CancelToken::new();
        token.cancel();
        assert!(token.is_cancelled());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let token = CancelToken::new();
        let observer = token.clone();

        token.cancel();
        assert!(observer.is_cancelled());
    }
}
