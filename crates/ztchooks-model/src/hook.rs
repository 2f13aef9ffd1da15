//! Decoding of verified hook bodies.
//!
//! [`hook_type`] reads only the envelope; [`decode_hook`] dispatches on the
//! envelope's `hook_type` and decodes the matching payload. Both expect the
//! body bytes exactly as they were verified.

use tracing::debug;

use crate::error::ModelResult;
use crate::payload::{
    MemberConfigChanged, MemberDeleted, NetworkConfigChanged, NetworkCreated, NetworkDeleted,
    NetworkMemberAuth, NetworkMemberDeauth, NetworkSsoLogin, NetworkSsoLoginError,
    NewMemberJoined, OrgInviteAccepted, OrgInviteRejected, OrgInviteSent, OrgMemberRemoved,
};
use crate::types::{HookBase, HookType};

/// A decoded hook, one variant per [`HookType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Hook {
    /// `NETWORK_JOIN`.
    NetworkJoin(NewMemberJoined),
    /// `NETWORK_AUTH`.
    NetworkAuth(NetworkMemberAuth),
    /// `NETWORK_DEAUTH`.
    NetworkDeauth(NetworkMemberDeauth),
    /// `NETWORK_SSO_LOGIN`.
    NetworkSsoLogin(NetworkSsoLogin),
    /// `NETWORK_SSO_LOGIN_ERROR`.
    NetworkSsoLoginError(NetworkSsoLoginError),
    /// `NETWORK_CREATED`.
    NetworkCreated(NetworkCreated),
    /// `NETWORK_CONFIG_CHANGED`.
    NetworkConfigChanged(NetworkConfigChanged),
    /// `NETWORK_DELETED`.
    NetworkDeleted(NetworkDeleted),
    /// `MEMBER_CONFIG_CHANGED`.
    MemberConfigChanged(MemberConfigChanged),
    /// `MEMBER_DELETED`.
    MemberDeleted(MemberDeleted),
    /// `ORG_INVITE_SENT`.
    OrgInviteSent(OrgInviteSent),
    /// `ORG_INVITE_ACCEPTED`.
    OrgInviteAccepted(OrgInviteAccepted),
    /// `ORG_INVITE_REJECTED`.
    OrgInviteRejected(OrgInviteRejected),
    /// `ORG_MEMBER_REMOVED`.
    OrgMemberRemoved(OrgMemberRemoved),
    /// A hook type this crate does not know; only the envelope is decoded.
    Unknown(HookBase),
}

impl Hook {
    /// The hook's type.
    #[must_use]
    pub fn hook_type(&self) -> HookType {
        self.base().hook_type
    }

    /// The common envelope fields.
    #[must_use]
    pub fn base(&self) -> &HookBase {
        match self {
            Self::NetworkJoin(h) => &h.base,
            Self::NetworkAuth(h) => &h.base,
            Self::NetworkDeauth(h) => &h.base,
            Self::NetworkSsoLogin(h) => &h.base,
            Self::NetworkSsoLoginError(h) => &h.base,
            Self::NetworkCreated(h) => &h.base,
            Self::NetworkConfigChanged(h) => &h.base,
            Self::NetworkDeleted(h) => &h.base,
            Self::MemberConfigChanged(h) => &h.base,
            Self::MemberDeleted(h) => &h.base,
            Self::OrgInviteSent(h) => &h.base,
            Self::OrgInviteAccepted(h) => &h.base,
            Self::OrgInviteRejected(h) => &h.base,
            Self::OrgMemberRemoved(h) => &h.base,
            Self::Unknown(base) => base,
        }
    }
}

/// Read the hook type from a payload without decoding the rest.
///
/// # Errors
///
/// Returns [`crate::ModelError::Json`] if the payload is not a JSON object.
///
/// # Examples
///
/// ```
/// use ztchooks_model::{HookType, hook_type};
///
/// let ty = hook_type(br#"{"hook_id":"h","org_id":"o","hook_type":"NETWORK_JOIN"}"#).unwrap();
/// assert_eq!(ty, HookType::NetworkJoin);
/// ```
pub fn hook_type(payload: &[u8]) -> ModelResult<HookType> {
    let base: HookBase = serde_json::from_slice(payload)?;
    Ok(base.hook_type)
}

/// Decode a payload into the [`Hook`] variant named by its `hook_type`.
///
/// # Errors
///
/// Returns [`crate::ModelError::Json`] if the payload is not JSON or a field
/// has the wrong shape for its hook type.
pub fn decode_hook(payload: &[u8]) -> ModelResult<Hook> {
    let ty = hook_type(payload)?;
    debug!(hook_type = %ty, "Decoding hook payload");

    let hook = match ty {
        HookType::NetworkJoin => Hook::NetworkJoin(serde_json::from_slice(payload)?),
        HookType::NetworkAuth => Hook::NetworkAuth(serde_json::from_slice(payload)?),
        HookType::NetworkDeauth => Hook::NetworkDeauth(serde_json::from_slice(payload)?),
        HookType::NetworkSsoLogin => Hook::NetworkSsoLogin(serde_json::from_slice(payload)?),
        HookType::NetworkSsoLoginError => {
            Hook::NetworkSsoLoginError(serde_json::from_slice(payload)?)
        }
        HookType::NetworkCreated => Hook::NetworkCreated(serde_json::from_slice(payload)?),
        HookType::NetworkConfigChanged => {
            Hook::NetworkConfigChanged(serde_json::from_slice(payload)?)
        }
        HookType::NetworkDeleted => Hook::NetworkDeleted(serde_json::from_slice(payload)?),
        HookType::MemberConfigChanged => {
            Hook::MemberConfigChanged(serde_json::from_slice(payload)?)
        }
        HookType::MemberDeleted => Hook::MemberDeleted(serde_json::from_slice(payload)?),
        HookType::OrgInviteSent => Hook::OrgInviteSent(serde_json::from_slice(payload)?),
        HookType::OrgInviteAccepted => Hook::OrgInviteAccepted(serde_json::from_slice(payload)?),
        HookType::OrgInviteRejected => Hook::OrgInviteRejected(serde_json::from_slice(payload)?),
        HookType::OrgMemberRemoved => Hook::OrgMemberRemoved(serde_json::from_slice(payload)?),
        HookType::Unknown => Hook::Unknown(serde_json::from_slice(payload)?),
    };

    Ok(hook)
}
