// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

use super::ProfileChanges;

/// A server-originated event concerning a cached profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileNotification {
    /// The user was seen online just now.
    Seen { user_id: UserId },
    /// The server pushed new values for some fields of the profile.
    Changed {
        user_id: UserId,
        changes: ProfileChanges,
    },
}

impl ProfileNotification {
    pub fn user_id(&self) -> &UserId {
        match self {
            ProfileNotification::Seen { user_id } => user_id,
            ProfileNotification::Changed { user_id, .. } => user_id,
        }
    }
}
