// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

const FETCH_FAILED_MESSAGE: &str = "We couldn't load this profile right now. Please try again later.";
const UPDATE_FAILED_MESSAGE: &str = "We couldn't save your changes. Please try again later.";

/// Failures surfaced to callers of the `ProfileStore`. The message is safe to show to users; the
/// technical cause is only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("{message}")]
    Fetch { message: String },
    #[error("{message}")]
    Update { message: String },
}

impl ProfileStoreError {
    pub(crate) fn fetch_failed() -> Self {
        Self::Fetch {
            message: FETCH_FAILED_MESSAGE.to_string(),
        }
    }

    pub(crate) fn update_failed() -> Self {
        Self::Update {
            message: UPDATE_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Fetch { message } | Self::Update { message } => message,
        }
    }
}

/// Failure of a single subscriber during a broadcast. Only logged, never surfaced.
#[derive(Debug, thiserror::Error)]
pub(crate) enum SubscriberError {
    #[error("Subscriber returned an error: {0:#}")]
    Failed(anyhow::Error),
    #[error("Subscriber panicked: {0}")]
    Panicked(String),
}
