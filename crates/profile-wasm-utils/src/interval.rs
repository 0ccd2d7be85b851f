// profile-core-client/profile-wasm-utils
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use futures::{stream, Stream};

use crate::sleep;

/// Yields `()` every `period`, the first item after one full period has elapsed.
pub fn interval_stream(period: Duration) -> impl Stream<Item = ()> {
    stream::unfold((), move |_| async move {
        sleep(period).await;
        Some(((), ()))
    })
}
