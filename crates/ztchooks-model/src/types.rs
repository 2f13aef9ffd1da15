//! Hook type catalogue and the envelope shared by every hook.
//!
//! Enum variants use idiomatic Rust `PascalCase` naming and map to the
//! `SCREAMING_SNAKE_CASE` wire strings that ZeroTier Central sends in the
//! `hook_type` field.

use serde::{Deserialize, Serialize};

/// Kind of event a webhook reports.
///
/// Deserialization never fails on an unrecognised string; it yields
/// [`HookType::Unknown`] so that new hook types do not break receivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HookType {
    /// A member asked to join a network for the first time.
    NetworkJoin,
    /// A member was authorized on a network.
    NetworkAuth,
    /// A member was deauthorized from a network.
    NetworkDeauth,
    /// A user logged into a network through SSO.
    NetworkSsoLogin,
    /// An SSO login attempt failed.
    NetworkSsoLoginError,
    /// A network was created.
    NetworkCreated,
    /// A network configuration changed.
    NetworkConfigChanged,
    /// A network was deleted.
    NetworkDeleted,
    /// A member configuration changed.
    MemberConfigChanged,
    /// A member was deleted.
    MemberDeleted,
    /// An organization invite was sent.
    OrgInviteSent,
    /// An organization invite was accepted.
    OrgInviteAccepted,
    /// An organization invite was rejected.
    OrgInviteRejected,
    /// A member was removed from the organization.
    OrgMemberRemoved,
    /// Any hook type this crate does not know about.
    #[default]
    Unknown,
}

impl HookType {
    /// Every known hook type, excluding [`HookType::Unknown`].
    pub const ALL: [Self; 14] = [
        Self::NetworkJoin,
        Self::NetworkAuth,
        Self::NetworkDeauth,
        Self::NetworkSsoLogin,
        Self::NetworkSsoLoginError,
        Self::NetworkCreated,
        Self::NetworkConfigChanged,
        Self::NetworkDeleted,
        Self::MemberConfigChanged,
        Self::MemberDeleted,
        Self::OrgInviteSent,
        Self::OrgInviteAccepted,
        Self::OrgInviteRejected,
        Self::OrgMemberRemoved,
    ];

    /// Returns the wire-format string for this hook type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkJoin => "NETWORK_JOIN",
            Self::NetworkAuth => "NETWORK_AUTH",
            Self::NetworkDeauth => "NETWORK_DEAUTH",
            Self::NetworkSsoLogin => "NETWORK_SSO_LOGIN",
            Self::NetworkSsoLoginError => "NETWORK_SSO_LOGIN_ERROR",
            Self::NetworkCreated => "NETWORK_CREATED",
            Self::NetworkConfigChanged => "NETWORK_CONFIG_CHANGED",
            Self::NetworkDeleted => "NETWORK_DELETED",
            Self::MemberConfigChanged => "MEMBER_CONFIG_CHANGED",
            Self::MemberDeleted => "MEMBER_DELETED",
            Self::OrgInviteSent => "ORG_INVITE_SENT",
            Self::OrgInviteAccepted => "ORG_INVITE_ACCEPTED",
            Self::OrgInviteRejected => "ORG_INVITE_REJECTED",
            Self::OrgMemberRemoved => "ORG_MEMBER_REMOVED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Map a wire-format string to a hook type, falling back to
    /// [`HookType::Unknown`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == value)
            .unwrap_or(Self::Unknown)
    }
}

impl std::fmt::Display for HookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HookType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HookType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&s))
    }
}

/// Fields present in every hook delivered by ZeroTier Central.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HookBase {
    /// Central ID of the hook that fired.
    pub hook_id: String,
    /// Organization the hook belongs to.
    pub org_id: String,
    /// Kind of event.
    pub hook_type: HookType,
}
