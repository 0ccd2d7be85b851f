// profile-core-client/profile-wasm-utils
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc::UnboundedReceiver;

/// Adapts a tokio mpsc receiver into a `Stream`. Works on both native and wasm targets since
/// tokio's `sync` feature doesn't depend on a runtime.
pub struct ReceiverStream<T> {
    receiver: UnboundedReceiver<T>,
}

impl<T> ReceiverStream<T> {
    pub fn new(receiver: UnboundedReceiver<T>) -> Self {
        Self { receiver }
    }
}

impl<T> Stream for ReceiverStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
