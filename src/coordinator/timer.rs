//! Grace timer for provisional pauses.
//!
//! When agent audio is paused on user speech onset, the pause is provisional:
//! an interim backchannel classification may still rescue playback. If nothing
//! rescues it within the grace period, the timer expires and the pause is
//! promoted to a committed interruption.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::debug;

/// A single armed grace timer.
///
/// Cancellation is safe to race with expiry: the expiry task re-reads an
/// atomic cancelled flag after its sleep completes, so a cancel that lands
/// first turns the expiry into a no-op even though the sleep already
/// finished (last writer wins). The epoch ties the timer to the pause episode
/// it was armed for; expiry handlers compare epochs under the session lock so
/// a stale timer can never finalize a newer episode.
#[derive(Debug)]
pub struct FalseInterruptionTimer {
    cancelled: Arc<AtomicBool>,
    epoch: u64,
    handle: Option<JoinHandle<()>>,
}

impl FalseInterruptionTimer {
    /// Arm a timer that runs `on_expire` after `grace` unless cancelled first.
    pub(crate) fn arm<F, Fut>(epoch: u64, grace: Duration, on_expire: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            if flag.load(Ordering::Acquire) {
                debug!("Grace timer for pause episode {} cancelled before expiry", epoch);
                return;
            }
            on_expire().await;
        });

        Self {
            cancelled,
            epoch,
            handle: Some(handle),
        }
    }

    /// The pause episode this timer was armed for.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Cancel the timer. Safe to call while the timer is about to fire; the
    /// atomic flag covers the window between sleep completion and the expiry
    /// body running.
    pub fn cancel(mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Consume the timer without aborting its task.
    ///
    /// Only used from inside the expiry path itself, where an abort would
    /// cancel the caller mid-flight.
    pub(crate) fn detach(mut self) {
        self.handle.take();
    }
}

impl Drop for FalseInterruptionTimer {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
