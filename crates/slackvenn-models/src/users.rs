use serde::{Deserialize, Serialize};

use crate::id::UserId;

// https://api.slack.com/types/user

/// User profile, only the fields we read.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
}

/// An user
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// The handle, e.g. `alice.johnson`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

// https://api.slack.com/methods/users.info

/// Payload of `users.info`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub user: User,
}
