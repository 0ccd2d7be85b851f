// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use time_provider::{next_timestamp, SystemTimeProvider, TimeProvider};

mod time_provider;
