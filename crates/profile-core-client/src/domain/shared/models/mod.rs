// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use cache_key::CacheKey;
pub use request_error::RequestError;
pub use user_id::{UserId, UserIdError};

mod cache_key;
mod request_error;
mod user_id;
