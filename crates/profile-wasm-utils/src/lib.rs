// profile-core-client/profile-wasm-utils
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub use futures::future::AbortHandle;
use futures::future::Abortable;

pub use future_ext::PlatformFutureExt;
pub use interval::interval_stream;
pub use receiver_stream::ReceiverStream;

mod future_ext;
mod interval;
mod receiver_stream;

#[cfg(not(target_arch = "wasm32"))]
pub trait SendUnlessWasm: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> SendUnlessWasm for T {}

#[cfg(target_arch = "wasm32")]
pub trait SendUnlessWasm {}

#[cfg(target_arch = "wasm32")]
impl<T> SendUnlessWasm for T {}

#[cfg(not(target_arch = "wasm32"))]
pub trait SyncUnlessWasm: Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Sync> SyncUnlessWasm for T {}

#[cfg(target_arch = "wasm32")]
pub trait SyncUnlessWasm {}

#[cfg(target_arch = "wasm32")]
impl<T> SyncUnlessWasm for T {}

#[cfg(target_arch = "wasm32")]
pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T>>>;
#[cfg(not(target_arch = "wasm32"))]
pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

#[cfg(target_arch = "wasm32")]
pub type PinnedStream<T> = futures::stream::LocalBoxStream<'static, T>;
#[cfg(not(target_arch = "wasm32"))]
pub type PinnedStream<T> = futures::stream::BoxStream<'static, T>;

pub fn spawn<T>(future: T)
where
    T: Future + SendUnlessWasm + 'static,
    T::Output: SendUnlessWasm,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        future.await;
    });
    #[cfg(not(target_arch = "wasm32"))]
    tokio::spawn(future);
}

/// Spawns `future` and returns a handle which stops it at its next suspension point.
/// Whether `spawn` can be called from here. Natively that requires a tokio runtime.
pub fn can_spawn() -> bool {
    #[cfg(target_arch = "wasm32")]
    return true;
    #[cfg(not(target_arch = "wasm32"))]
    return tokio::runtime::Handle::try_current().is_ok();
}

pub fn spawn_abortable<T>(future: T) -> AbortHandle
where
    T: Future<Output = ()> + SendUnlessWasm + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    spawn(async move {
        _ = Abortable::new(future, registration).await;
    });
    handle
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(duration.as_millis().try_into().unwrap_or(u32::MAX))
        .await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
