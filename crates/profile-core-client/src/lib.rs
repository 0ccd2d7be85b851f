// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{ConfigError, ProfileStoreConfig};
pub use app::services::{
    ProfileStore, ProfileStoreError, ProfileSubscriber, Subscription, WeakProfileStore,
};
pub use domain::profiles::models::{
    avatar_url, ProfileChanges, ProfileNotification, ProfileRecord,
};
pub use domain::shared::models::UserId;
pub use store_builder::ProfileStoreBuilder;

pub mod app;
pub mod domain;
pub mod infra;
mod store_builder;
