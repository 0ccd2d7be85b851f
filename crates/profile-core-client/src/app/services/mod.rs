// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use error::ProfileStoreError;
pub use profile_store::{ProfileStore, WeakProfileStore};
pub use profile_subscriber::ProfileSubscriber;
pub use subscriber_registry::{Subscription, SubscriptionId};

pub(crate) use subscriber_registry::SubscriberRegistry;

mod error;
mod profile_store;
mod profile_subscriber;
mod subscriber_registry;
