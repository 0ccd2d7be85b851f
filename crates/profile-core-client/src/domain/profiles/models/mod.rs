// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use avatar::{avatar_url, initials, AVATAR_SERVICE_URL};
pub use profile_changes::ProfileChanges;
pub use profile_notification::ProfileNotification;
pub use profile_payload::{CompanyPayload, ProfilePayload};
pub use profile_record::ProfileRecord;

mod avatar;
mod profile_changes;
mod profile_notification;
mod profile_payload;
mod profile_record;
