// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{format_err, Result};
use tokio::sync::mpsc::UnboundedSender;

use profile_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::profiles::models::ProfileRecord;

/// Receives every profile broadcast by a `ProfileStore`. Errors are logged by the store and
/// don't affect other subscribers.
/// Receives every profile the store broadcasts.
///
/// Subscribers are called synchronously by whoever wrote to the store, and other writers of the
/// same store wait until the broadcast is done, so `handle_profile` should return quickly. A
/// subscriber may write to the store itself; that record is delivered to all subscribers right
/// after the current broadcast.
pub trait ProfileSubscriber: SendUnlessWasm + SyncUnlessWasm {
    fn handle_profile(&self, profile: &ProfileRecord) -> Result<()>;
}

impl<F> ProfileSubscriber for F
where
    F: Fn(&ProfileRecord) -> Result<()> + SendUnlessWasm + SyncUnlessWasm,
{
    fn handle_profile(&self, profile: &ProfileRecord) -> Result<()> {
        self(profile)
    }
}

impl ProfileSubscriber for UnboundedSender<ProfileRecord> {
    fn handle_profile(&self, profile: &ProfileRecord) -> Result<()> {
        self.send(profile.clone())
            .map_err(|_| format_err!("Receiver of the profile channel was dropped"))
    }
}
