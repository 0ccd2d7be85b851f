// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::num::ParseIntError;
use std::time::Duration;

use url::Url;

use crate::domain::shared::models::{UserId, UserIdError};

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

mod vars {
    pub const BASE_URL: &str = "PROFILE_BASE_URL";
    pub const DEMO_USER_ID: &str = "PROFILE_DEMO_USER_ID";
    pub const REFRESH_INTERVAL_SECS: &str = "PROFILE_REFRESH_INTERVAL_SECS";
    pub const REQUEST_TIMEOUT_SECS: &str = "PROFILE_REQUEST_TIMEOUT_SECS";
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStoreConfig {
    /// Root of the profile service. Profiles live at `{base_url}/users/{id}`.
    pub base_url: Url,
    /// The user fetched when no user id is given and the one the simulated refresh reports.
    pub demo_user_id: UserId,
    /// How often the simulated refresh fires.
    pub refresh_interval: Duration,
    /// Upper bound for a single request. Ignored in the browser.
    pub request_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
    #[error("{var} is not a valid user id: {source}")]
    InvalidUserId {
        var: &'static str,
        source: UserIdError,
    },
    #[error("{var} is not a valid number of seconds: {source}")]
    InvalidDuration {
        var: &'static str,
        source: ParseIntError,
    },
    #[error("{var} must be greater than zero")]
    ZeroDuration { var: &'static str },
}

impl Default for ProfileStoreConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
            demo_user_id: UserId::DEMO,
            refresh_interval: Duration::from_secs(30),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ProfileStoreConfig {
    /// Reads the configuration from `PROFILE_*` environment variables, falling back to the
    /// defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(vars::BASE_URL) {
            config.base_url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
                var: vars::BASE_URL,
                source,
            })?;
        }

        if let Some(value) = lookup(vars::DEMO_USER_ID) {
            config.demo_user_id =
                value
                    .parse()
                    .map_err(|source| ConfigError::InvalidUserId {
                        var: vars::DEMO_USER_ID,
                        source,
                    })?;
        }

        if let Some(value) = lookup(vars::REFRESH_INTERVAL_SECS) {
            config.refresh_interval = parse_secs(vars::REFRESH_INTERVAL_SECS, &value)?;
        }

        if let Some(value) = lookup(vars::REQUEST_TIMEOUT_SECS) {
            config.request_timeout = parse_secs(vars::REQUEST_TIMEOUT_SECS, &value)?;
        }

        Ok(config)
    }
}

fn parse_secs(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|source| ConfigError::InvalidDuration { var, source })?;
    if secs == 0 {
        return Err(ConfigError::ZeroDuration { var });
    }
    Ok(Duration::from_secs(secs))
}
