// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use futures::StreamExt;

use profile_wasm_utils::{interval_stream, PinnedStream};

use crate::domain::profiles::models::ProfileNotification;
use crate::domain::profiles::services::NotificationSource;
use crate::domain::shared::models::UserId;

/// Stands in for a real push channel by reporting `user_id` as seen once every `period`.
pub struct IntervalNotificationSource {
    user_id: UserId,
    period: Duration,
}

impl IntervalNotificationSource {
    pub fn new(user_id: UserId, period: Duration) -> Self {
        Self { user_id, period }
    }
}

impl NotificationSource for IntervalNotificationSource {
    fn notifications(&self) -> PinnedStream<ProfileNotification> {
        let user_id = self.user_id;
        let ticks = interval_stream(self.period).map(move |_| ProfileNotification::Seen { user_id });

        #[cfg(target_arch = "wasm32")]
        return ticks.boxed_local();
        #[cfg(not(target_arch = "wasm32"))]
        return ticks.boxed();
    }
}
