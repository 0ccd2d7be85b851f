// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::domain::profiles::models::{ProfileChanges, ProfilePayload};
use crate::domain::profiles::services::ProfileService;
use crate::domain::shared::models::{RequestError, UserId};

/// Talks to a JSON profile service exposing `GET` and `PUT` on `{base_url}/users/{id}`.
pub struct HttpProfileService {
    client: Client,
    base_url: Url,
}

impl HttpProfileService {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, RequestError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    fn user_url(&self, user_id: &UserId) -> Result<Url, RequestError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RequestError::Transport {
                msg: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .push("users")
            .push(&user_id.to_string());
        Ok(url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl ProfileService for HttpProfileService {
    async fn load_profile(&self, user_id: &UserId) -> Result<ProfilePayload, RequestError> {
        let url = self.user_url(user_id)?;
        debug!(%url, "Loading profile");

        let response = self.client.get(url).send().await?;
        Ok(ensure_success(response)?.json::<ProfilePayload>().await?)
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        changes: &ProfileChanges,
    ) -> Result<ProfileChanges, RequestError> {
        let url = self.user_url(user_id)?;
        debug!(%url, "Updating profile");

        let response = self.client.put(url).json(changes).send().await?;
        Ok(ensure_success(response)?.json::<ProfileChanges>().await?)
    }
}

fn ensure_success(response: Response) -> Result<Response, RequestError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return RequestError::Decode {
                msg: value.to_string(),
            };
        }
        if let Some(status) = value.status() {
            return RequestError::Status {
                status: status.as_u16(),
            };
        }
        RequestError::Transport {
            msg: value.to_string(),
        }
    }
}
