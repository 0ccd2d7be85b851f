// profile-core-client/profile-core-integration-tests
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{bail, Result};
use futures::executor::block_on;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tokio::sync::mpsc::unbounded_channel;

use profile_core_client::test::mocks::MockProfileService;
use profile_core_client::{user_id, ProfileChanges, ProfileRecord};

use crate::tests::async_test;
use crate::tests::helpers::TestStore;

fn store_with_updates(updates: usize) -> TestStore {
    let mut service = MockProfileService::new();
    service
        .expect_update_profile()
        .times(updates)
        .returning(|_, changes| {
            let changes = changes.clone();
            Box::pin(async move { Ok(changes) })
        });
    TestStore::new(service)
}

fn rename(name: &str) -> ProfileChanges {
    ProfileChanges::new().with("name", name)
}

#[async_test]
async fn test_subscribers_are_called_in_registration_order() -> Result<()> {
    let test = store_with_updates(1);
    let log = Arc::new(Mutex::new(Vec::<String>::new()));

    let subscriptions = ["a", "b", "c"].map(|name| {
        let log = log.clone();
        test.store.subscribe(move |profile| {
            log.lock().push(format!("{}:{}", name, profile.name));
            Ok(())
        })
    });

    test.store.update_profile(&user_id!(1), &rename("Leanne")).await?;

    assert_eq!(*log.lock(), vec!["a:Leanne", "b:Leanne", "c:Leanne"]);
    assert_eq!(test.store.subscriber_count(), subscriptions.len());

    Ok(())
}

#[async_test]
async fn test_failing_subscribers_do_not_affect_others() -> Result<()> {
    let test = store_with_updates(1);
    let log = Arc::new(Mutex::new(Vec::<&'static str>::new()));

    let _first = test.store.subscribe({
        let log = log.clone();
        move |_| {
            log.lock().push("first");
            bail!("Subscriber is having a bad day")
        }
    });
    let _second = test.store.subscribe(|_| panic!("Subscriber exploded"));
    let _third = test.store.subscribe({
        let log = log.clone();
        move |_| {
            log.lock().push("third");
            Ok(())
        }
    });

    let profile = test.store.update_profile(&user_id!(1), &rename("Leanne")).await?;

    assert_eq!(profile.name, "Leanne");
    assert_eq!(*log.lock(), vec!["first", "third"]);

    Ok(())
}

#[async_test]
async fn test_disposed_subscription_is_not_called() -> Result<()> {
    let test = store_with_updates(2);

    let (subscription, broadcasts) = test.record_broadcasts();
    let (_other_subscription, other_broadcasts) = test.record_broadcasts();
    assert_eq!(test.store.subscriber_count(), 2);

    test.store.update_profile(&user_id!(1), &rename("First")).await?;

    subscription.dispose();
    subscription.dispose();
    assert!(!subscription.is_active());
    assert_eq!(test.store.subscriber_count(), 1);

    test.store.update_profile(&user_id!(1), &rename("Second")).await?;

    assert_eq!(broadcasts.len(), 1);
    assert_eq!(other_broadcasts.len(), 2);

    Ok(())
}

#[async_test]
async fn test_same_callback_can_be_subscribed_twice() -> Result<()> {
    let test = store_with_updates(1);
    let count = Arc::new(Mutex::new(0));

    let callback = {
        let count = count.clone();
        move |_: &ProfileRecord| -> Result<()> {
            *count.lock() += 1;
            Ok(())
        }
    };

    let first = test.store.subscribe(callback.clone());
    let second = test.store.subscribe(callback);
    assert_ne!(first.id(), second.id());

    test.store.update_profile(&user_id!(1), &rename("Leanne")).await?;
    assert_eq!(*count.lock(), 2);

    Ok(())
}

#[async_test]
async fn test_channel_subscriber_receives_profiles() -> Result<()> {
    let test = store_with_updates(1);
    let (tx, mut rx) = unbounded_channel();

    let _subscription = test.store.add_subscriber(tx);
    let profile = test.store.update_profile(&user_id!(1), &rename("Leanne")).await?;

    assert_eq!(rx.try_recv().ok(), Some(profile));

    Ok(())
}

#[async_test]
async fn test_subscriber_can_read_store_during_broadcast() -> Result<()> {
    let test = store_with_updates(1);
    let observed = Arc::new(Mutex::new(None));

    let _subscription = test.store.subscribe({
        let store = test.store.downgrade();
        let observed = observed.clone();
        move |profile| {
            let cached = store
                .upgrade()
                .and_then(|store| store.cached_profile(&profile.id));
            *observed.lock() = Some(cached.as_ref() == Some(profile));
            Ok(())
        }
    });

    test.store.update_profile(&user_id!(1), &rename("Leanne")).await?;

    assert_eq!(*observed.lock(), Some(true));

    Ok(())
}

#[async_test]
async fn test_subscriber_can_write_to_store_during_broadcast() -> Result<()> {
    let test = store_with_updates(2);
    let log = Arc::new(Mutex::new(Vec::<String>::new()));

    let _writer = test.store.subscribe({
        let store = test.store.downgrade();
        let log = log.clone();
        move |profile| {
            log.lock().push(format!("writer:{}", profile.name));
            if profile.name != "First" {
                return Ok(());
            }
            if let Some(store) = store.upgrade() {
                block_on(store.update_profile(&profile.id, &rename("Second")))?;
            }
            Ok(())
        }
    });
    let _reader = test.store.subscribe({
        let log = log.clone();
        move |profile| {
            log.lock().push(format!("reader:{}", profile.name));
            Ok(())
        }
    });

    let profile = test.store.update_profile(&user_id!(1), &rename("First")).await?;

    assert_eq!(profile.name, "First");
    // Every subscriber sees both writes, in the order they hit the cache.
    assert_eq!(
        *log.lock(),
        vec![
            "writer:First",
            "reader:First",
            "writer:Second",
            "reader:Second"
        ]
    );
    assert_eq!(
        test.store.cached_profile(&user_id!(1)).map(|p| p.name),
        Some("Second".to_string())
    );

    Ok(())
}

#[async_test]
async fn test_weak_store_handle_does_not_keep_store_alive() -> Result<()> {
    let test = store_with_updates(0);
    let store = test.store.downgrade();

    let subscription = test.store.subscribe({
        let store = store.clone();
        move |profile| {
            if let Some(store) = store.upgrade() {
                store.invalidate(Some(&profile.id));
            }
            Ok(())
        }
    });

    assert!(store.upgrade().is_some());
    drop(test);

    assert!(store.upgrade().is_none());
    assert!(!subscription.is_active());

    Ok(())
}
