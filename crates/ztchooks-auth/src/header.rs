//! Parsing of the webhook signature header.
//!
//! ZeroTier Central attaches a header of the form
//!
//! ```text
//! t=1694033429,v1=04d87956d1953f28ac04d441f139fc655109e9b5c64396fb55dbdf567c735f86
//! ```
//!
//! Fields are comma separated `key=value` pairs in any order. `t` carries the
//! signing time in Unix seconds, every key starting with `v` carries one hex
//! encoded signature, and unknown keys are ignored so that new fields can be
//! added without breaking receivers.

use tracing::trace;

use crate::clock::Clock;
use crate::error::VerifyError;
use crate::freshness::{Tolerance, check_freshness};

/// Name of the HTTP header that carries the signature.
pub const SIGNATURE_HEADER: &str = "X-ZTC-Signature";

/// Decomposed signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeader {
    /// Signing time claimed by the sender, in Unix seconds.
    pub timestamp: i64,
    /// Hex-encoded signatures in header order. Never empty.
    pub signatures: Vec<String>,
}

/// Parse a signature header and check that it is still fresh.
///
/// # Errors
///
/// Returns a format error from [`decode_signature_header`], or
/// [`VerifyError::Expired`] if the header is older than `tolerance`.
///
/// # Examples
///
/// ```
/// use ztchooks_auth::clock::FixedClock;
/// use ztchooks_auth::freshness::Tolerance;
/// use ztchooks_auth::header::parse_signature_header;
///
/// let clock = FixedClock::new(1_000);
/// let header = parse_signature_header("t=900,v1=abcd", Tolerance::secs(300), &clock).unwrap();
/// assert_eq!(header.timestamp, 900);
/// assert_eq!(header.signatures, vec!["abcd"]);
/// ```
pub fn parse_signature_header(
    header: &str,
    tolerance: Tolerance,
    clock: &dyn Clock,
) -> Result<SignedHeader, VerifyError> {
    let parsed = decode_signature_header(header)?;
    check_freshness(parsed.timestamp, tolerance, clock)?;
    Ok(parsed)
}

/// Split a signature header into its timestamp and signatures.
///
/// A repeated `t` field overwrites the earlier one. Signature values are kept
/// verbatim; they are compared as strings, not decoded.
///
/// # Errors
///
/// - [`VerifyError::MalformedPair`] if a field does not contain exactly one `=`
/// - [`VerifyError::InvalidTimestamp`] if `t` is not a base-10 integer
/// - [`VerifyError::MissingTimestamp`] if there is no `t` field
/// - [`VerifyError::NoSignatures`] if there is no `v*` field
pub fn decode_signature_header(header: &str) -> Result<SignedHeader, VerifyError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for pair in header.split(',') {
        let (key, value) = split_pair(pair)?;

        if key == "t" {
            let parsed = value
                .parse::<i64>()
                .map_err(|_| VerifyError::InvalidTimestamp(value.to_owned()))?;
            timestamp = Some(parsed);
        } else if key.starts_with('v') {
            signatures.push(value.to_owned());
        } else {
            trace!(key, "Ignoring unknown signature header field");
        }
    }

    let timestamp = timestamp.ok_or(VerifyError::MissingTimestamp)?;
    if signatures.is_empty() {
        return Err(VerifyError::NoSignatures);
    }

    Ok(SignedHeader {
        timestamp,
        signatures,
    })
}

/// Split `key=value`, rejecting fields with no `=` or more than one.
fn split_pair(pair: &str) -> Result<(&str, &str), VerifyError> {
    let mut parts = pair.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok((key, value)),
        _ => Err(VerifyError::MalformedPair(pair.to_owned())),
    }
}
