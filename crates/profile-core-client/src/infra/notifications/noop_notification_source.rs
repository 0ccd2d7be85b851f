// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use futures::{stream, StreamExt};

use profile_wasm_utils::PinnedStream;

use crate::domain::profiles::models::ProfileNotification;
use crate::domain::profiles::services::NotificationSource;

#[derive(Default)]
pub struct NoopNotificationSource {}

impl NotificationSource for NoopNotificationSource {
    fn notifications(&self) -> PinnedStream<ProfileNotification> {
        #[cfg(target_arch = "wasm32")]
        return stream::pending().boxed_local();
        #[cfg(not(target_arch = "wasm32"))]
        return stream::pending().boxed();
    }
}
