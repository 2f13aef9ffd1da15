//! Timestamp freshness validation.
//!
//! A signature header is stale when `now > timestamp + tolerance`. The boundary
//! is inclusive: a header signed exactly `tolerance` seconds ago still passes.
//! Timestamps in the future are accepted.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::clock::Clock;
use crate::error::VerifyError;

/// Default tolerance window, in seconds (five minutes).
pub const DEFAULT_TOLERANCE_SECS: u64 = 300;

/// How old a signed header may be before it is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tolerance {
    /// Reject headers older than this many seconds.
    Within(u64),
    /// Never reject a header for its age.
    Unbounded,
}

impl Tolerance {
    /// Tolerance of `secs` seconds.
    #[must_use]
    pub fn secs(secs: u64) -> Self {
        Self::Within(secs)
    }

    /// Latest acceptable `now` for a header signed at `timestamp`, or `None`
    /// when there is no limit.
    #[must_use]
    pub fn deadline(self, timestamp: i64) -> Option<i64> {
        match self {
            Self::Within(secs) => {
                let secs = i64::try_from(secs).unwrap_or(i64::MAX);
                Some(timestamp.saturating_add(secs))
            }
            Self::Unbounded => None,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::Within(DEFAULT_TOLERANCE_SECS)
    }
}

impl From<std::time::Duration> for Tolerance {
    fn from(value: std::time::Duration) -> Self {
        Self::Within(value.as_secs())
    }
}

/// Reject `timestamp` if it is older than `tolerance` according to `clock`.
///
/// # Errors
///
/// Returns [`VerifyError::Expired`] when the current time is past
/// `timestamp + tolerance`.
pub fn check_freshness(
    timestamp: i64,
    tolerance: Tolerance,
    clock: &dyn Clock,
) -> Result<(), VerifyError> {
    let Some(deadline) = tolerance.deadline(timestamp) else {
        return Ok(());
    };

    let now = clock.now_unix();
    trace!(timestamp, now, deadline, "Checking signature freshness");

    if now > deadline {
        return Err(VerifyError::Expired { timestamp, now });
    }

    Ok(())
}
