// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::services::ProfileSubscriber;
use crate::domain::general::services::TimeProvider;
use crate::domain::profiles::services::{NotificationSource, ProfileService};

pub type DynNotificationSource = Arc<dyn NotificationSource>;
pub type DynProfileService = Arc<dyn ProfileService>;
pub type DynProfileSubscriber = Arc<dyn ProfileSubscriber>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct ProfileStoreDependencies {
    pub profile_service: DynProfileService,
    pub time_provider: DynTimeProvider,
}
