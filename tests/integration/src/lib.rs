//! Integration tests for the ztchooks crates.
//!
//! These tests drive `ztchooks-auth` and `ztchooks-model` together the way an
//! HTTP adapter would: verify the signature header against the raw body, then
//! decode the body.
//!
//! Run them with:
//! ```text
//! cargo test -p ztchooks-integration
//! ```

use std::sync::Once;

use ztchooks_auth::compute_signature;

static INIT: Once = Once::new();

/// Pre-shared key from ZeroTier Central's published test vector.
pub const TEST_SECRET: &str = "778c6dab5feca625c7831644d18c4d0e4b3a337bff8a1e1c8f938f9cc20e6536";

/// Signing time of the published test vector.
pub const TEST_TIMESTAMP: i64 = 1_694_033_429;

/// Signature header of the published test vector.
pub const TEST_HEADER: &str =
    "t=1694033429,v1=04d87956d1953f28ac04d441f139fc655109e9b5c64396fb55dbdf567c735f86";

/// Body of the published test vector.
pub const TEST_PAYLOAD: &str = r#"{"hook_id":"ae76d4c0-c94e-4025-a648-2c504eb90e3c","org_id":"1bb4dc96-f311-4c4a-ac93-551cbc0fa3da","hook_type":"NETWORK_JOIN","network_id":"19d9808567a17ccf","member_id":"a02505e545"}"#;

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Generate a random hex-encoded 32-byte pre-shared key.
#[must_use]
pub fn random_secret() -> String {
    let key: [u8; 32] = rand::random();
    hex::encode(key)
}

/// Build a `t=...,v1=...` header the way ZeroTier Central signs a delivery.
///
/// # Panics
///
/// Panics if `secret` is not valid hex.
#[must_use]
pub fn sign_header(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let signature =
        compute_signature(timestamp, payload, secret).expect("test secret must be valid hex");
    format!("t={timestamp},v1={signature}")
}

/// Current Unix time in seconds.
#[must_use]
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

mod test_decode;
mod test_verify;
