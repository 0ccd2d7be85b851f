// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use notification_source::NotificationSource;
pub use profile_service::ProfileService;

mod notification_source;
mod profile_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::profile_service::MockProfileService;
}
