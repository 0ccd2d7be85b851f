// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use profile_wasm_utils::{PinnedStream, SendUnlessWasm, SyncUnlessWasm};

use crate::domain::profiles::models::ProfileNotification;

/// Delivers server-originated profile events. A `ProfileStore` subscribes once, when it is
/// built, and keeps consuming the stream until it is disposed.
pub trait NotificationSource: SendUnlessWasm + SyncUnlessWasm {
    fn notifications(&self) -> PinnedStream<ProfileNotification>;
}
