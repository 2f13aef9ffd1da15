//! ZeroTier Central webhook event types.
//!
//! ZeroTier Central delivers webhooks as JSON objects that share a common
//! envelope ([`HookBase`]: `hook_id`, `org_id`, `hook_type`) plus fields
//! specific to each [`HookType`]. This crate provides typed payloads for every
//! hook type and helpers to decode a body once its signature has been checked
//! with `ztchooks-auth`.
//!
//! ```rust
//! use ztchooks_model::{Hook, decode_hook};
//!
//! let body = br#"{"hook_id":"h","org_id":"o","hook_type":"NETWORK_JOIN","network_id":"n","member_id":"m"}"#;
//! match decode_hook(body).unwrap() {
//!     Hook::NetworkJoin(join) => assert_eq!(join.member_id, "m"),
//!     other => panic!("unexpected hook {other:?}"),
//! }
//! ```

pub mod error;
pub mod hook;
pub mod payload;
pub mod types;

pub use error::{ModelError, ModelResult};
pub use hook::{Hook, decode_hook, hook_type};
pub use types::{HookBase, HookType};
