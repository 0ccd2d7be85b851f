// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::Any;
use std::fmt::{Display, Formatter};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::warn;

use crate::app::deps::DynProfileSubscriber;
use crate::app::services::error::SubscriberError;
use crate::domain::profiles::models::ProfileRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registrations in the order they were made. The same subscriber may be registered more than
/// once, each registration has its own id.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(SubscriptionId, DynProfileSubscriber)>>,
}

/// Returned by `ProfileStore::subscribe`. Calling `dispose` removes the registration it was
/// returned for. Dropping a `Subscription` does not unsubscribe.
#[derive(Clone)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RegistryInner>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Removes the registration. Calling this more than once is a no-op.
    pub fn dispose(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry.remove(self.id);
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.contains(self.id))
            .unwrap_or(false)
    }
}

impl SubscriberRegistry {
    pub fn insert(&self, subscriber: DynProfileSubscriber) -> Subscription {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.subscribers.lock().push((id, subscriber));
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    /// Delivers `profile` to every subscriber registered at the time of the call, in
    /// registration order. Subscribers may (un)subscribe while being called.
    pub fn broadcast(&self, profile: &ProfileRecord) {
        let subscribers = self.inner.subscribers.lock().clone();

        for (id, subscriber) in subscribers {
            let result = panic::catch_unwind(AssertUnwindSafe(|| subscriber.handle_profile(profile)))
                .map_err(|payload| SubscriberError::Panicked(panic_message(payload)))
                .and_then(|result| result.map_err(SubscriberError::Failed));

            if let Err(err) = result {
                warn!(subscription = %id, user_id = %profile.id, "{}", err);
            }
        }
    }
}

impl RegistryInner {
    fn remove(&self, id: SubscriptionId) {
        self.subscribers.lock().retain(|(sub_id, _)| *sub_id != id);
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.subscribers.lock().iter().any(|(sub_id, _)| *sub_id == id)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        return msg.to_string();
    }
    if let Some(msg) = payload.downcast_ref::<String>() {
        return msg.clone();
    }
    "unknown panic".to_string()
}
