//! Platform-aware async sleep.
//!
//! On native: delegates to [`tokio::time::sleep`].
//! On wasm32: backed by a browser timer via `gloo_timers`.
//!
//! Suspends the calling task only; the thread is never blocked. There is no
//! cancellation: a caller wanting a timeout races the future against its own
//! timer.

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::time::sleep;

/// Resume the calling task no earlier than `duration` from now.
///
/// Durations beyond the browser timer range (`u32` milliseconds) are clamped.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: std::time::Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}
