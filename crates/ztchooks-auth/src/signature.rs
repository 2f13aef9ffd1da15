//! Webhook signature computation and verification.
//!
//! Verification runs four steps:
//!
//! 1. Parse the signature header into a timestamp and candidate signatures.
//! 2. Reject the header if the timestamp is outside the tolerance window.
//! 3. Compute `hex(HMAC-SHA256(hex_decode(secret), "<timestamp>,<payload>"))`.
//! 4. Compare the expected signature against each candidate in constant time.
//!
//! The main entry point is [`verify`], which never fails: any error along the
//! way yields `false`.

use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::VerifyError;
use crate::freshness::Tolerance;
use crate::header::parse_signature_header;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected signature for `payload` signed at `timestamp`.
///
/// The signed message is the decimal timestamp, a comma, then the raw payload
/// bytes. The key is the hex-decoded `secret`. The result is lowercase hex.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidSecret`] if `secret` is not valid hex.
///
/// # Examples
///
/// ```
/// use ztchooks_auth::signature::compute_signature;
///
/// let sig = compute_signature(1_694_033_429, b"{}", "00ff").unwrap();
/// assert_eq!(sig.len(), 64);
/// assert!(sig.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
/// ```
pub fn compute_signature(
    timestamp: i64,
    payload: &[u8],
    secret: &str,
) -> Result<String, VerifyError> {
    let key = hex::decode(secret).map_err(|_| VerifyError::InvalidSecret)?;

    let mut mac = HmacSha256::new_from_slice(&key).map_err(|_| VerifyError::InvalidSecret)?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b",");
    mac.update(payload);

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Returns `true` if `expected` equals any of `candidates`.
///
/// Candidates are scanned in order and the scan stops at the first match.
/// Each comparison is exact, case-sensitive and constant-time with respect to
/// the candidate contents.
#[must_use]
pub fn matches_any(expected: &str, candidates: &[String]) -> bool {
    let expected = expected.as_bytes();
    candidates
        .iter()
        .any(|candidate| bool::from(expected.ct_eq(candidate.as_bytes())))
}

/// Verify a webhook delivery against the wall clock.
///
/// `secret` is the hex-encoded pre-shared key, `sig_header` the raw value of
/// the [`SIGNATURE_HEADER`](crate::header::SIGNATURE_HEADER) header and
/// `payload` the request body exactly as received.
///
/// Returns `true` only if the header is well formed, not older than
/// `tolerance`, and carries at least one signature matching the payload.
///
/// # Examples
///
/// ```
/// use ztchooks_auth::{Tolerance, verify};
///
/// let secret = "778c6dab5feca625c7831644d18c4d0e4b3a337bff8a1e1c8f938f9cc20e6536";
/// assert!(!verify(secret, "t=not-a-number,v1=00", b"{}", Tolerance::default()));
/// ```
#[must_use]
pub fn verify(secret: &str, sig_header: &str, payload: &[u8], tolerance: Tolerance) -> bool {
    verify_with_clock(secret, sig_header, payload, tolerance, &SystemClock)
}

/// Verify a webhook delivery using `clock` as the current time.
///
/// See [`verify`].
#[must_use]
pub fn verify_with_clock(
    secret: &str,
    sig_header: &str,
    payload: &[u8],
    tolerance: Tolerance,
    clock: &dyn Clock,
) -> bool {
    match check_signature(secret, sig_header, payload, tolerance, clock) {
        Ok(()) => true,
        Err(err) => {
            debug!(
                error = %err,
                format_error = err.is_format_error(),
                expired = err.is_expired(),
                "Webhook signature verification failed"
            );
            false
        }
    }
}

/// Run the full pipeline, keeping the reason for a rejection.
fn check_signature(
    secret: &str,
    sig_header: &str,
    payload: &[u8],
    tolerance: Tolerance,
    clock: &dyn Clock,
) -> Result<(), VerifyError> {
    let header = parse_signature_header(sig_header, tolerance, clock)?;

    debug!(
        timestamp = header.timestamp,
        candidates = header.signatures.len(),
        payload_len = payload.len(),
        "Verifying webhook signature"
    );

    let expected = compute_signature(header.timestamp, payload, secret)?;

    if matches_any(&expected, &header.signatures) {
        debug!(timestamp = header.timestamp, "Webhook signature verified");
        Ok(())
    } else {
        Err(VerifyError::SignatureMismatch)
    }
}
