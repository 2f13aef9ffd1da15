//! Time sources for the freshness check.
//!
//! The verifier never reads the wall clock directly. It asks a [`Clock`] for
//! the current Unix time once per call, which lets tests and replays pin the
//! instant with [`FixedClock`].

use chrono::Utc;

/// Source of the current time in whole seconds since the Unix epoch.
///
/// Implementations must be cheap and side-effect free; the verifier samples
/// the clock exactly once per verification.
pub trait Clock: Send + Sync {
    /// Current Unix time in seconds.
    fn now_unix(&self) -> i64;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at a single instant.
///
/// # Examples
///
/// ```
/// use ztchooks_auth::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1_694_033_429);
/// assert_eq!(clock.now_unix(), 1_694_033_429);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: i64,
}

impl FixedClock {
    /// Create a clock that always reports `now`.
    #[must_use]
    pub fn new(now: i64) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now_unix(&self) -> i64 {
        self.now
    }
}
