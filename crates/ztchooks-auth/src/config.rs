//! Verifier configuration.
//!
//! Provides [`VerifierConfig`], the settings an adapter needs to call
//! [`crate::verify`]: the tolerance window and the header to read the
//! signature from. Values load from environment variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ConfigError;
use crate::freshness::{DEFAULT_TOLERANCE_SECS, Tolerance};
use crate::header::SIGNATURE_HEADER;

const ENV_TOLERANCE_SECS: &str = "ZTC_HOOK_TOLERANCE_SECS";
const ENV_ENFORCE_TOLERANCE: &str = "ZTC_HOOK_ENFORCE_TOLERANCE";
const ENV_SIGNATURE_HEADER: &str = "ZTC_HOOK_SIGNATURE_HEADER";

/// Webhook verifier configuration.
///
/// # Examples
///
/// ```
/// use ztchooks_auth::config::VerifierConfig;
/// use ztchooks_auth::freshness::Tolerance;
///
/// let config = VerifierConfig::default();
/// assert_eq!(config.tolerance(), Tolerance::Within(300));
/// assert_eq!(config.signature_header, "X-ZTC-Signature");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct VerifierConfig {
    /// Maximum accepted age of a signature header, in seconds.
    #[builder(default = DEFAULT_TOLERANCE_SECS)]
    pub tolerance_secs: u64,

    /// Whether stale headers are rejected at all.
    #[builder(default = true)]
    pub enforce_tolerance: bool,

    /// HTTP header carrying the signature.
    #[builder(default = String::from(SIGNATURE_HEADER))]
    pub signature_header: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
            enforce_tolerance: true,
            signature_header: String::from(SIGNATURE_HEADER),
        }
    }
}

impl VerifierConfig {
    /// The tolerance to pass to [`crate::verify`].
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        if self.enforce_tolerance {
            Tolerance::Within(self.tolerance_secs)
        } else {
            Tolerance::Unbounded
        }
    }

    /// Load configuration from environment variables, ignoring unparsable values.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `ZTC_HOOK_TOLERANCE_SECS` | `300` |
    /// | `ZTC_HOOK_ENFORCE_TOLERANCE` | `true` |
    /// | `ZTC_HOOK_SIGNATURE_HEADER` | `X-ZTC-Signature` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var(ENV_TOLERANCE_SECS) {
            if let Ok(n) = v.trim().parse::<u64>() {
                config.tolerance_secs = n;
            }
        }
        if let Ok(v) = std::env::var(ENV_ENFORCE_TOLERANCE) {
            if let Some(b) = parse_bool(&v) {
                config.enforce_tolerance = b;
            }
        }
        if let Ok(v) = std::env::var(ENV_SIGNATURE_HEADER) {
            config.signature_header = v;
        }

        config
    }

    /// Load configuration from environment variables, rejecting unparsable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad variable.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|name| std::env::var(name).ok())
    }

    /// Strict loader over an arbitrary variable source.
    fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_TOLERANCE_SECS) {
            config.tolerance_secs = v.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: ENV_TOLERANCE_SECS,
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup(ENV_ENFORCE_TOLERANCE) {
            config.enforce_tolerance = parse_bool(&v).ok_or_else(|| ConfigError::InvalidValue {
                name: ENV_ENFORCE_TOLERANCE,
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup(ENV_SIGNATURE_HEADER) {
            config.signature_header = v;
        }

        Ok(config)
    }
}

/// Parse `1`/`true` and `0`/`false` (case-insensitive).
fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
