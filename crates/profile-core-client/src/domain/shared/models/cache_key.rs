// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use super::UserId;

/// The key under which a profile is cached. Derived deterministically from a `UserId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&UserId> for CacheKey {
    fn from(value: &UserId) -> Self {
        CacheKey(format!("user_{}", value))
    }
}

impl From<UserId> for CacheKey {
    fn from(value: UserId) -> Self {
        CacheKey::from(&value)
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
