// profile-core-client/profile-core-integration-tests
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::test as async_test;
#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen_test::wasm_bindgen_test as async_test;

#[cfg(not(target_arch = "wasm32"))]
mod http_profile_service;
mod subscriptions;
