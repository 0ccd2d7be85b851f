// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{bail, Result};

use profile_wasm_utils::can_spawn;

use crate::app::deps::{
    DynNotificationSource, DynProfileService, DynTimeProvider, ProfileStoreConfig,
    ProfileStoreDependencies,
};
use crate::app::services::ProfileStore;
use crate::domain::general::services::{SystemTimeProvider, TimeProvider};
use crate::domain::profiles::services::{NotificationSource, ProfileService};
use crate::infra::http::HttpProfileService;
use crate::infra::notifications::IntervalNotificationSource;

pub struct ProfileStoreBuilder {
    config: ProfileStoreConfig,
    notification_source: Option<DynNotificationSource>,
    profile_service: Option<DynProfileService>,
    time_provider: DynTimeProvider,
}

impl ProfileStoreBuilder {
    pub(crate) fn new() -> Self {
        ProfileStoreBuilder {
            config: Default::default(),
            notification_source: None,
            profile_service: None,
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    pub fn set_config(mut self, config: ProfileStoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the `HttpProfileService` that would otherwise be created for
    /// `ProfileStoreConfig::base_url`.
    pub fn set_profile_service<S: ProfileService + 'static>(mut self, profile_service: S) -> Self {
        self.profile_service = Some(Arc::new(profile_service));
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    /// Replaces the simulated refresh, which reports the demo user as seen every
    /// `ProfileStoreConfig::refresh_interval`.
    pub fn set_notification_source<N: NotificationSource + 'static>(
        mut self,
        notification_source: N,
    ) -> Self {
        self.notification_source = Some(Arc::new(notification_source));
        self
    }

    /// Builds the store and starts consuming notifications. Fails natively when called outside
    /// of a tokio runtime.
    pub fn build(self) -> Result<ProfileStore> {
        if !can_spawn() {
            bail!("ProfileStore must be built from within a tokio runtime");
        }

        let profile_service: DynProfileService = match self.profile_service {
            Some(service) => service,
            None => Arc::new(http_profile_service(&self.config)?),
        };

        let notification_source = self.notification_source.unwrap_or_else(|| {
            Arc::new(IntervalNotificationSource::new(
                self.config.demo_user_id,
                self.config.refresh_interval,
            ))
        });

        Ok(ProfileStore::new(
            self.config,
            ProfileStoreDependencies {
                profile_service,
                time_provider: self.time_provider,
            },
            notification_source,
        ))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn http_profile_service(config: &ProfileStoreConfig) -> Result<HttpProfileService> {
    Ok(HttpProfileService::with_timeout(
        config.base_url.clone(),
        config.request_timeout,
    )?)
}

#[cfg(target_arch = "wasm32")]
fn http_profile_service(config: &ProfileStoreConfig) -> Result<HttpProfileService> {
    Ok(HttpProfileService::new(config.base_url.clone()))
}
