// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use anyhow::Result;
use chrono::{DateTime, Utc};
use futures::future::{AbortHandle, Shared};
use futures::{FutureExt, StreamExt};
use parking_lot::{Mutex, ReentrantMutex};
use tracing::{debug, error, info, warn};

use profile_wasm_utils::{
    spawn_abortable, PinnedFuture, PlatformFutureExt, SendUnlessWasm, SyncUnlessWasm,
};

use crate::app::deps::{DynNotificationSource, ProfileStoreConfig, ProfileStoreDependencies};
use crate::app::services::{ProfileStoreError, ProfileSubscriber, SubscriberRegistry, Subscription};
use crate::domain::general::services::next_timestamp;
use crate::domain::profiles::models::{ProfileChanges, ProfileNotification, ProfileRecord};
use crate::domain::shared::models::{CacheKey, UserId};
use crate::ProfileStoreBuilder;

type FetchResult = Result<ProfileRecord, ProfileStoreError>;
type SharedFetch = Shared<PinnedFuture<FetchResult>>;

/// Fetches, caches, updates and broadcasts user profiles.
///
/// Holds at most one record per user. Records are broadcast to subscribers whenever they change
/// through `update_profile` or a server notification; plain fetches are not broadcast.
///
/// `ProfileStore` is a cheap handle, clones share the same cache and subscribers. Separately
/// built stores are fully isolated from each other.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<ProfileStoreInner>,
}

/// A handle that doesn't keep the store alive. Subscribers that need to call back into the
/// store should capture one of these instead of a `ProfileStore`.
#[derive(Clone)]
pub struct WeakProfileStore {
    inner: Weak<ProfileStoreInner>,
}

impl WeakProfileStore {
    pub fn upgrade(&self) -> Option<ProfileStore> {
        self.inner.upgrade().map(|inner| ProfileStore { inner })
    }
}

struct ProfileStoreInner {
    config: ProfileStoreConfig,
    deps: ProfileStoreDependencies,
    cache: Mutex<HashMap<CacheKey, ProfileRecord>>,
    /// Lock order is `pending_fetches` before `cache`.
    pending_fetches: Mutex<HashMap<CacheKey, PendingFetch>>,
    next_fetch_id: AtomicU64,
    subscribers: SubscriberRegistry,
    /// Records waiting to be broadcast, in the order they were written to the cache. Reentrant
    /// so that a subscriber may write to the store while being called.
    outbox: ReentrantMutex<RefCell<Outbox>>,
    notification_task: Mutex<Option<AbortHandle>>,
}

struct PendingFetch {
    id: u64,
    fetch: SharedFetch,
}

#[derive(Default)]
struct Outbox {
    queue: VecDeque<ProfileRecord>,
    draining: bool,
}

impl ProfileStore {
    pub fn builder() -> ProfileStoreBuilder {
        ProfileStoreBuilder::new()
    }

    pub(crate) fn new(
        config: ProfileStoreConfig,
        deps: ProfileStoreDependencies,
        notification_source: DynNotificationSource,
    ) -> Self {
        let inner = Arc::new(ProfileStoreInner {
            config,
            deps,
            cache: Default::default(),
            pending_fetches: Default::default(),
            next_fetch_id: Default::default(),
            subscribers: Default::default(),
            outbox: Default::default(),
            notification_task: Default::default(),
        });

        let notifications = notification_source.notifications();
        let weak_inner = Arc::downgrade(&inner);

        let handle = spawn_abortable(async move {
            let mut notifications = notifications;
            while let Some(notification) = notifications.next().await {
                let Some(inner) = weak_inner.upgrade() else {
                    break;
                };
                inner.handle_notification(notification);
            }
        });
        *inner.notification_task.lock() = Some(handle);

        Self { inner }
    }

    pub fn config(&self) -> &ProfileStoreConfig {
        &self.inner.config
    }

    pub fn downgrade(&self) -> WeakProfileStore {
        WeakProfileStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Returns the profile of `user_id`. Served from the cache unless there is no entry yet or
    /// `force_refresh` is set. Concurrent cache misses for the same user share a single request,
    /// `force_refresh` always starts a new one which supersedes any request in flight.
    pub async fn fetch_profile(&self, user_id: &UserId, force_refresh: bool) -> FetchResult {
        let key = CacheKey::from(user_id);

        if !force_refresh {
            if let Some(profile) = self.inner.cache.lock().get(&key).cloned() {
                debug!(%user_id, "Serving profile from cache");
                return Ok(profile);
            }
        }

        let fetch = {
            let mut pending_fetches = self.inner.pending_fetches.lock();
            let in_flight = pending_fetches
                .get(&key)
                .filter(|_| !force_refresh)
                .map(|pending| pending.fetch.clone());

            match in_flight {
                Some(fetch) => fetch,
                None => {
                    let id = self.inner.next_fetch_id.fetch_add(1, Ordering::Relaxed);
                    let fetch = self.load_profile(*user_id, key.clone(), id);
                    pending_fetches.insert(
                        key,
                        PendingFetch {
                            id,
                            fetch: fetch.clone(),
                        },
                    );
                    fetch
                }
            }
        };

        fetch.await
    }

    /// Fetches the profile of the configured demo user.
    pub async fn fetch_demo_profile(&self) -> FetchResult {
        let user_id = self.inner.config.demo_user_id;
        self.fetch_profile(&user_id, false).await
    }

    /// Returns the cached profile of `user_id` without touching the network.
    pub fn cached_profile(&self, user_id: &UserId) -> Option<ProfileRecord> {
        self.inner.cache.lock().get(&CacheKey::from(user_id)).cloned()
    }

    /// Sends `changes` to the profile service, merges the response into the cached record and
    /// broadcasts the result to all subscribers before returning it.
    pub async fn update_profile(
        &self,
        user_id: &UserId,
        changes: &ProfileChanges,
    ) -> Result<ProfileRecord, ProfileStoreError> {
        let response = self
            .inner
            .deps
            .profile_service
            .update_profile(user_id, changes)
            .await
            .map_err(|err| {
                error!(%user_id, error = %err, "Failed to update profile");
                ProfileStoreError::update_failed()
            })?;

        self.inner
            .write_and_broadcast(user_id, |existing, _now, last_updated| {
                ProfileRecord::merged(*user_id, existing, &response, last_updated).map(Some)
            })
            .and_then(|profile| profile.ok_or(MergeError::Skipped))
            .map_err(|err| {
                error!(%user_id, error = %err, "Failed to apply profile update");
                ProfileStoreError::update_failed()
            })
    }

    /// Registers `callback` for all future broadcasts.
    ///
    /// A callback capturing a `ProfileStore` keeps the store and its notification task alive
    /// until the subscription is disposed. Capture a `WeakProfileStore` (see `downgrade`) instead.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ProfileRecord) -> Result<()> + SendUnlessWasm + SyncUnlessWasm + 'static,
    {
        self.add_subscriber(callback)
    }

    /// Registers any `ProfileSubscriber` (e.g. a channel sender) for all future broadcasts.
    pub fn add_subscriber(&self, subscriber: impl ProfileSubscriber + 'static) -> Subscription {
        self.inner.subscribers.insert(Arc::new(subscriber))
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    /// Removes the cached profile of `user_id`, or every cached profile if `user_id` is `None`.
    /// Requests in flight for the removed profiles still resolve for their callers but no
    /// longer write to the cache.
    pub fn invalidate(&self, user_id: Option<&UserId>) {
        let mut pending_fetches = self.inner.pending_fetches.lock();
        let mut cache = self.inner.cache.lock();
        match user_id {
            Some(user_id) => {
                debug!(%user_id, "Invalidating cached profile");
                let key = CacheKey::from(user_id);
                pending_fetches.remove(&key);
                cache.remove(&key);
            }
            None => {
                debug!("Invalidating all cached profiles");
                pending_fetches.clear();
                cache.clear();
            }
        }
    }

    /// Stops consuming server notifications. Cached profiles and subscriptions remain usable.
    pub fn dispose(&self) {
        self.inner.stop_notifications();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.notification_task.lock().is_none()
    }
}

impl ProfileStore {
    /// Returns the request loading the profile of `user_id` into the cache. The request only
    /// holds a weak reference to the store so that an abandoned request doesn't keep it alive.
    fn load_profile(&self, user_id: UserId, key: CacheKey, fetch_id: u64) -> SharedFetch {
        let inner: Weak<ProfileStoreInner> = Arc::downgrade(&self.inner);
        let profile_service = self.inner.deps.profile_service.clone();

        async move {
            debug!(%user_id, "Loading profile");
            let result = profile_service.load_profile(&user_id).await;

            let Some(inner) = inner.upgrade() else {
                return Err(ProfileStoreError::fetch_failed());
            };

            // Superseded by `invalidate` or a forced refresh while the request was running.
            let mut pending_fetches = inner.pending_fetches.lock();
            let is_current = pending_fetches
                .get(&key)
                .is_some_and(|pending| pending.id == fetch_id);
            if is_current {
                pending_fetches.remove(&key);
            }

            let payload = result.map_err(|err| {
                error!(%user_id, error = %err, "Failed to load profile");
                ProfileStoreError::fetch_failed()
            })?;

            let mut cache = inner.cache.lock();
            let last_updated = next_timestamp(
                cache.get(&key).map(|profile| profile.last_updated),
                inner.deps.time_provider.now(),
            );
            let profile = ProfileRecord::from_payload(user_id, payload, last_updated);

            if is_current {
                cache.insert(key, profile.clone());
            } else {
                debug!(%user_id, "Not caching result of superseded request");
            }

            Ok(profile)
        }
        .platform_boxed()
        .shared()
    }
}

#[derive(Debug, thiserror::Error)]
enum MergeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("No record was produced")]
    Skipped,
}

impl ProfileStoreInner {
    /// Stores the record produced by `apply` and broadcasts it. `apply` receives the cached
    /// record (if any), the current time and the `lastUpdated` timestamp to use. Returning
    /// `Ok(None)` leaves the cache untouched and skips the broadcast.
    fn write_and_broadcast(
        &self,
        user_id: &UserId,
        apply: impl FnOnce(
            Option<&ProfileRecord>,
            DateTime<Utc>,
            DateTime<Utc>,
        ) -> Result<Option<ProfileRecord>, serde_json::Error>,
    ) -> Result<Option<ProfileRecord>, MergeError> {
        let outbox = self.outbox.lock();
        let key = CacheKey::from(user_id);

        let profile = {
            let mut cache = self.cache.lock();
            let existing = cache.get(&key);
            let now = self.deps.time_provider.now();
            let last_updated = next_timestamp(existing.map(|profile| profile.last_updated), now);

            let Some(profile) = apply(existing, now, last_updated)? else {
                return Ok(None);
            };
            cache.insert(key, profile.clone());
            profile
        };

        outbox.borrow_mut().queue.push_back(profile.clone());
        self.drain_outbox(&outbox);

        Ok(Some(profile))
    }

    /// Broadcasts queued records until the queue is empty. When called from within a
    /// subscriber the enclosing call delivers the record once the current broadcast is done.
    fn drain_outbox(&self, outbox: &RefCell<Outbox>) {
        if outbox.borrow().draining {
            return;
        }
        outbox.borrow_mut().draining = true;

        loop {
            let next = outbox.borrow_mut().queue.pop_front();
            let Some(profile) = next else {
                break;
            };
            self.subscribers.broadcast(&profile);
        }

        outbox.borrow_mut().draining = false;
    }

    fn handle_notification(&self, notification: ProfileNotification) {
        let user_id = *notification.user_id();

        // Notifications only ever touch profiles that are already cached.
        let result = match notification {
            ProfileNotification::Seen { user_id } => {
                self.write_and_broadcast(&user_id, |existing, now, last_updated| {
                    Ok(existing.map(|profile| profile.seen_at(now, last_updated)))
                })
            }
            ProfileNotification::Changed { user_id, changes } => {
                self.write_and_broadcast(&user_id, |existing, _now, last_updated| {
                    existing
                        .map(|profile| {
                            ProfileRecord::merged(user_id, Some(profile), &changes, last_updated)
                        })
                        .transpose()
                })
            }
        };

        match result {
            Ok(Some(_)) => debug!(%user_id, "Applied profile notification"),
            Ok(None) => debug!(%user_id, "Ignoring notification for uncached profile"),
            Err(err) => warn!(%user_id, error = %err, "Failed to apply profile notification"),
        }
    }

    fn stop_notifications(&self) {
        if let Some(handle) = self.notification_task.lock().take() {
            info!("Stopping profile notifications");
            handle.abort();
        }
    }
}

impl Drop for ProfileStoreInner {
    fn drop(&mut self) {
        if let Some(handle) = self.notification_task.get_mut().take() {
            handle.abort();
        }
    }
}
