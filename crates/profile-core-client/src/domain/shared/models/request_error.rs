// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Technical failure of a request against the profile service. Never shown to users, it only
/// ends up in the diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Request failed with HTTP status {status}")]
    Status { status: u16 },
    #[error("Transport error: {msg}")]
    Transport { msg: String },
    #[error("Unexpected server response: {msg}")]
    Decode { msg: String },
}

impl RequestError {
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn status(&self) -> Option<u16> {
        let RequestError::Status { status } = self else {
            return None;
        };
        Some(*status)
    }
}
