//! Cooperative cancellation for long-running searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A shared cooperative cancellation flag.
///
/// The token is the only cross-thread shared value in this crate: the caller
/// that starts a search owns setting it (typically from a watchdog thread
/// after a timeout), and every search loop polls it at each frontier pop and
/// recursive call, returning [`Solution::Cutoff`] as soon as it is set.
///
/// Setting is write-once: there is no way to reset a token, clone a fresh one
/// instead.
///
/// [`Solution::Cutoff`]: crate::Solution::Cutoff
///
/// # Example
///
/// ```
/// use treesearch::CancelToken;
///
/// let token = CancelToken::new();
/// assert!(!token.is_cancelled());
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new, unset token
    pub fn new() -> Self {
        CancelToken {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sets the flag; every search holding a clone of this token will return
    /// `Cutoff` at its next poll
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns true if the token has been set
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Spawns a watchdog thread that sets this token after `timeout`
    ///
    /// The worker running the search keeps polling as usual; the watchdog is
    /// detached and exits after setting the flag.
    pub fn cancel_after(&self, timeout: Duration) {
        let token = self.clone();
        thread::spawn(move || {
            thread::sleep(timeout);
            token.cancel();
        });
    }
}
