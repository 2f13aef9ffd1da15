//! Error types for webhook signature verification.
//!
//! Every stage of the verification pipeline reports failures through
//! [`VerifyError`]. The variants fall into two families: format errors (the
//! signature header could not be decomposed) and expiry errors (the header is
//! older than the tolerance window). [`crate::verify`] collapses all of them to
//! `false`; the distinction only exists for the stage functions and for logs.

/// Errors that can occur while verifying a webhook signature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// A header field did not split into exactly one key and one value.
    #[error("malformed signature header field: {0:?}")]
    MalformedPair(String),

    /// The `t` field is not a base-10 integer.
    #[error("invalid signature timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// The header carries no `t` field.
    #[error("signature header has no timestamp")]
    MissingTimestamp,

    /// The header carries no `v*` fields.
    #[error("signature header has no signatures")]
    NoSignatures,

    /// The signed timestamp plus the tolerance is earlier than the current time.
    #[error("signature timestamp {timestamp} expired (now {now})")]
    Expired {
        /// Timestamp claimed by the sender.
        timestamp: i64,
        /// Current time used for the comparison.
        now: i64,
    },

    /// The pre-shared secret is not valid hexadecimal.
    #[error("pre-shared secret is not valid hex")]
    InvalidSecret,

    /// None of the supplied signatures match the expected one.
    #[error("no signature matches")]
    SignatureMismatch,
}

impl VerifyError {
    /// Returns `true` if the header itself was malformed.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedPair(_)
                | Self::InvalidTimestamp(_)
                | Self::MissingTimestamp
                | Self::NoSignatures
        )
    }

    /// Returns `true` if the header was well formed but stale.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

/// Errors raised while loading [`crate::config::VerifierConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Name of the environment variable.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}
