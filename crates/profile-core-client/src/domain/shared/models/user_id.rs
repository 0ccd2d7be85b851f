// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::num::{NonZeroU64, ParseIntError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifies a user of the remote profile service. Always positive.
pub struct UserId(NonZeroU64);

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum UserIdError {
    #[error("User ids must be positive")]
    Zero,
    #[error(transparent)]
    Parse(#[from] ParseIntError),
}

impl UserId {
    /// The user shown by the dashboard when no user was selected explicitly.
    pub const DEMO: UserId = UserId(NonZeroU64::MIN);

    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::DEMO
    }
}

impl TryFrom<u64> for UserId {
    type Error = UserIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        UserId::new(value).ok_or(UserIdError::Zero)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.get()
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>()?.try_into()
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
