// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use profile_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::profiles::models::{ProfileChanges, ProfilePayload};
use crate::domain::shared::models::{RequestError, UserId};

/// The remote service owning the profiles.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ProfileService: SendUnlessWasm + SyncUnlessWasm {
    async fn load_profile(&self, user_id: &UserId) -> Result<ProfilePayload, RequestError>;

    /// Sends `changes` to the service and returns the fields the service acknowledged.
    async fn update_profile(
        &self,
        user_id: &UserId,
        changes: &ProfileChanges,
    ) -> Result<ProfileChanges, RequestError>;
}
