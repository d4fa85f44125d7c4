use std::time::Duration;

use dioxus::prelude::*;

/// Run `dismiss` after `secs` seconds on the UI task queue.
///
/// Used for success banners; the callback should check the banner still
/// shows the same text before clearing it.
pub fn dismiss_later(secs: u32, dismiss: impl FnOnce() + 'static) {
    spawn(async move {
        sleep(Duration::from_secs(u64::from(secs))).await;
        dismiss();
    });
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
