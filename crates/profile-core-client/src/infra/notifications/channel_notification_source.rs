// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use futures::{stream, StreamExt};
use parking_lot::Mutex;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use profile_wasm_utils::{PinnedStream, ReceiverStream};

use crate::domain::profiles::models::ProfileNotification;
use crate::domain::profiles::services::NotificationSource;

/// Bridges any push transport (WebSocket, SSE, …) to a `ProfileStore`. The transport feeds
/// notifications into the sender returned by `ChannelNotificationSource::new`.
pub struct ChannelNotificationSource {
    receiver: Mutex<Option<UnboundedReceiver<ProfileNotification>>>,
}

impl ChannelNotificationSource {
    pub fn new() -> (Self, UnboundedSender<ProfileNotification>) {
        let (tx, rx) = unbounded_channel();
        (
            Self {
                receiver: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

impl NotificationSource for ChannelNotificationSource {
    fn notifications(&self) -> PinnedStream<ProfileNotification> {
        let notifications = match self.receiver.lock().take() {
            Some(rx) => ReceiverStream::new(rx).left_stream(),
            None => {
                warn!("ChannelNotificationSource can only be consumed once");
                stream::empty().right_stream()
            }
        };

        #[cfg(target_arch = "wasm32")]
        return notifications.boxed_local();
        #[cfg(not(target_arch = "wasm32"))]
        return notifications.boxed();
    }
}
