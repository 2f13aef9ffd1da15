//! Signature verification for ZeroTier Central webhooks.
//!
//! ZeroTier Central signs every webhook delivery with a pre-shared key and
//! sends the result in the `X-ZTC-Signature` header:
//!
//! ```text
//! t=<unix-seconds>,v1=<hex HMAC-SHA256>[,v1=<hex>...]
//! ```
//!
//! The signature is `HMAC-SHA256(hex_decode(psk), "<t>,<body>")`. This crate
//! checks that the header is well formed, that it is no older than a tolerance
//! window, and that one of its signatures matches the body.
//!
//! # Usage
//!
//! ```rust
//! use ztchooks_auth::{Tolerance, verify};
//!
//! let psk = "778c6dab5feca625c7831644d18c4d0e4b3a337bff8a1e1c8f938f9cc20e6536";
//! let header = "t=1694033429,v1=04d87956d1953f28ac04d441f139fc655109e9b5c64396fb55dbdf567c735f86";
//! let body = br#"{"hook_id":"ae76d4c0-c94e-4025-a648-2c504eb90e3c","org_id":"1bb4dc96-f311-4c4a-ac93-551cbc0fa3da","hook_type":"NETWORK_JOIN","network_id":"19d9808567a17ccf","member_id":"a02505e545"}"#;
//!
//! assert!(verify(psk, header, body, Tolerance::Unbounded));
//! ```
//!
//! # Modules
//!
//! - [`clock`] - Injectable time source
//! - [`config`] - Verifier configuration loaded from the environment
//! - [`error`] - Verification error types
//! - [`freshness`] - Tolerance window and timestamp validation
//! - [`header`] - Signature header parsing
//! - [`signature`] - Signature computation, matching and verification

pub mod clock;
pub mod config;
pub mod error;
pub mod freshness;
pub mod header;
pub mod signature;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::VerifierConfig;
pub use error::{ConfigError, VerifyError};
pub use freshness::Tolerance;
pub use header::{SIGNATURE_HEADER, SignedHeader, parse_signature_header};
pub use signature::{compute_signature, matches_any, verify, verify_with_clock};
