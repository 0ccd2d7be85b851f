// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_dependencies::*;
pub use config::{ConfigError, ProfileStoreConfig};

mod app_dependencies;
mod config;
