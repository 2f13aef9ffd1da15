//! Typed payloads, one per hook type.
//!
//! Each payload flattens [`HookBase`] and adds the fields specific to its
//! event. Missing string fields decode as empty strings and configuration
//! snapshots decode as `None` when absent or `null`, so that a sparse
//! delivery still decodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::HookBase;

/// Free-form network or member configuration snapshot.
pub type Config = Map<String, Value>;

/// `NETWORK_JOIN`: the controller saw a new member trying to join a network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewMemberJoined {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Network the member is joining.
    pub network_id: String,
    /// Member attempting to join.
    pub member_id: String,
}

/// `NETWORK_AUTH`: a member was authorized on a network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkMemberAuth {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Network the member was authorized on.
    pub network_id: String,
    /// Authorized member.
    pub member_id: String,
    /// User who performed the authorization.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
}

/// `NETWORK_DEAUTH`: a member was deauthorized from a network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkMemberDeauth {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Network the member was deauthorized from.
    pub network_id: String,
    /// Deauthorized member.
    pub member_id: String,
    /// User who performed the deauthorization.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
}

/// `NETWORK_SSO_LOGIN`: a user logged into a network through an OIDC provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSsoLogin {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Network the login was performed on.
    pub network_id: String,
    /// Member the login was performed for.
    pub member_id: String,
    /// Email address of the SSO user.
    pub sso_user_email: String,
}

/// `NETWORK_SSO_LOGIN_ERROR`: an SSO login attempt failed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSsoLoginError {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Network the login was attempted on.
    pub network_id: String,
    /// Member the login was attempted for.
    pub member_id: String,
    /// Email address of the SSO user.
    pub sso_user_email: String,
    /// Description of the failure.
    pub error: String,
}

/// `NETWORK_CREATED`: an organization member created a network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkCreated {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// ID of the new network.
    pub network_id: String,
    /// Initial configuration of the network.
    pub network_config: Option<Config>,
    /// User who created the network.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
}

/// `NETWORK_CONFIG_CHANGED`: a network configuration changed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfigChanged {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Network that changed.
    pub network_id: String,
    /// User who made the change.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
    /// Configuration before the change.
    pub old_config: Option<Config>,
    /// Configuration after the change.
    pub new_config: Option<Config>,
}

/// `NETWORK_DELETED`: a network was deleted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkDeleted {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Deleted network.
    pub network_id: String,
    /// Configuration at the time of deletion.
    pub old_config: Option<Config>,
    /// User who deleted the network.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
}

/// `MEMBER_CONFIG_CHANGED`: a network member's configuration changed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberConfigChanged {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Network the member belongs to.
    pub network_id: String,
    /// Member that changed.
    pub member_id: String,
    /// Member configuration before the change.
    pub old_config: Option<Config>,
    /// Member configuration after the change.
    pub new_config: Option<Config>,
    /// User who made the change.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
}

/// `MEMBER_DELETED`: a network member was deleted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberDeleted {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Network the member belonged to.
    pub network_id: String,
    /// Deleted member.
    pub member_id: String,
    /// Member configuration at the time of deletion.
    pub old_config: Option<Config>,
    /// User who deleted the member.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
}

/// `ORG_INVITE_SENT`: someone was invited to the organization.
///
/// Only the organization owner can invite, so the inviter is not included.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgInviteSent {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// User sending the invite.
    pub user_id: String,
    /// Email address of the invitee.
    pub invitee_email: String,
}

/// `ORG_INVITE_ACCEPTED`: a user accepted an organization invite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgInviteAccepted {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// User accepting the invite.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
    /// Networks the user gained access to.
    pub network_ids: Option<Vec<String>>,
}

/// `ORG_INVITE_REJECTED`: a user rejected an organization invite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgInviteRejected {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// User rejecting the invite.
    pub user_id: String,
    /// Email address of that user.
    pub user_email: String,
}

/// `ORG_MEMBER_REMOVED`: a member was removed from the organization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgMemberRemoved {
    /// Common hook fields.
    #[serde(flatten)]
    pub base: HookBase,
    /// Removed user.
    pub user_id: String,
    /// Email address of the removed user.
    pub user_email: String,
}
