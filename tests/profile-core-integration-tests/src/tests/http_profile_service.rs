// profile-core-client/profile-core-integration-tests
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

use profile_core_client::domain::profiles::services::ProfileService;
use profile_core_client::domain::shared::models::RequestError;
use profile_core_client::infra::http::HttpProfileService;
use profile_core_client::infra::notifications::NoopNotificationSource;
use profile_core_client::{user_id, ProfileChanges, ProfileStore, ProfileStoreConfig};

async fn get_user(Path(id): Path<u64>) -> Result<Json<Value>, (StatusCode, String)> {
    match id {
        1 => Ok(Json(json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        }))),
        2 => Ok(Json(json!({ "id": 2, "name": "Ervin Howell" }))),
        3 => Err((StatusCode::OK, "<html>definitely not json</html>".to_string())),
        _ => Err((StatusCode::NOT_FOUND, "{}".to_string())),
    }
}

async fn put_user(Path(id): Path<u64>, Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(id);
    Json(body)
}

/// Serves the users API below `prefix` on a random local port and returns its base URL.
async fn serve(prefix: &str) -> Result<Url> {
    let users = Router::new().route("/users/:id", get(get_user).put(put_user));
    let router = if prefix.is_empty() {
        users
    } else {
        Router::new().nest(prefix, users)
    };

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok(Url::parse(&format!("http://{}{}", addr, prefix))?)
}

#[tokio::test]
async fn test_loads_profile() -> Result<()> {
    let service = HttpProfileService::new(serve("").await?);

    let payload = service.load_profile(&user_id!(1)).await?;
    assert_eq!(payload.name.as_deref(), Some("Leanne Graham"));
    assert_eq!(payload.username.as_deref(), Some("Bret"));
    assert_eq!(
        payload.company.and_then(|company| company.name).as_deref(),
        Some("Romaguera-Crona")
    );

    let sparse = service.load_profile(&user_id!(2)).await?;
    assert_eq!(sparse.name.as_deref(), Some("Ervin Howell"));
    assert_eq!(sparse.email, None);

    Ok(())
}

#[tokio::test]
async fn test_maps_response_errors() -> Result<()> {
    let service = HttpProfileService::new(serve("").await?);

    let err = service.load_profile(&user_id!(999)).await.unwrap_err();
    assert_eq!(err, RequestError::Status { status: 404 });
    assert!(err.is_not_found());

    let err = service.load_profile(&user_id!(3)).await.unwrap_err();
    assert!(matches!(err, RequestError::Decode { .. }));

    Ok(())
}

#[tokio::test]
async fn test_transport_errors() -> Result<()> {
    // Nothing listens on the discard port.
    let service = HttpProfileService::new("http://127.0.0.1:9".parse()?);

    let err = service.load_profile(&user_id!(1)).await.unwrap_err();
    assert!(matches!(err, RequestError::Transport { .. }));

    Ok(())
}

#[tokio::test]
async fn test_sends_updates_as_json() -> Result<()> {
    let service = HttpProfileService::new(serve("/api/v1").await?);

    let changes = ProfileChanges::new()
        .with("name", "Leanne G.")
        .with("phone", Value::Null);
    let response = service.update_profile(&user_id!(1), &changes).await?;

    assert_eq!(response, changes.with("id", 1));

    Ok(())
}

#[tokio::test]
async fn test_store_round_trip_over_http() -> Result<()> {
    let store = ProfileStore::builder()
        .set_config(ProfileStoreConfig {
            base_url: serve("").await?,
            ..Default::default()
        })
        .set_notification_source(NoopNotificationSource::default())
        .build()?;

    let profile = store.fetch_demo_profile().await?;
    assert_eq!(profile.name, "Leanne Graham");
    assert_eq!(profile.company.as_deref(), Some("Romaguera-Crona"));
    assert_eq!(
        profile.avatar_url,
        "https://ui-avatars.com/api/?name=LG&background=0D8ABC&color=fff&size=128"
    );

    let err = store.fetch_profile(&user_id!(999), false).await.unwrap_err();
    assert_eq!(
        err.message(),
        "We couldn't load this profile right now. Please try again later."
    );
    assert_eq!(store.cached_profile(&user_id!(999)), None);

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let _subscription = store.add_subscriber(tx);

    let updated = store
        .update_profile(
            &user_id!(1),
            &ProfileChanges::new().with("email", "leanne@example.com"),
        )
        .await?;

    assert_eq!(updated.email, "leanne@example.com");
    assert_eq!(updated.name, "Leanne Graham");
    assert_eq!(rx.recv().await, Some(updated));

    Ok(())
}
