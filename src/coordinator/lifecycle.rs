//! Session lifecycle notifications and pause bookkeeping.
//!
//! The host drives these from what its voice pipeline already knows: when the
//! agent starts and stops producing audio, when the activity monitor paused
//! playback on user speech onset, and when a real user turn begins.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use tokio::time::Duration;
use tracing::{debug, info};

use crate::audio::PausedPlayback;

use super::state::AgentState;
use super::timer::FalseInterruptionTimer;
use super::{CoordinatorInner, InterruptionCoordinator};

impl InterruptionCoordinator {
    /// The agent began producing audio: a new turn cycle starts clean.
    ///
    /// Clears the backchannel flag and discards any stale pause handle or
    /// grace timer left over from the previous cycle.
    pub async fn agent_speech_started(&self) {
        let mut state = self.inner.state.lock().await;
        state.agent_state = AgentState::Speaking;
        state.reset_for_new_turn();
        debug!("Agent speech started - state reset for new turn cycle");
    }

    /// Agent playback ended, naturally or because an interruption stopped it.
    pub async fn agent_speech_finished(&self, interrupted: bool) {
        let mut state = self.inner.state.lock().await;
        state.agent_state = AgentState::Listening;
        state.paused_playback = None;
        state.cancel_timer();
        debug!("Agent speech finished (interrupted: {})", interrupted);
    }

    /// Upstream committed to a real user turn; the agent is now listening.
    pub async fn user_turn_started(&self) {
        let mut state = self.inner.state.lock().await;
        state.agent_state = AgentState::Listening;
    }

    /// Record that agent audio was paused on user speech onset and arm the
    /// grace timer for this pause episode.
    ///
    /// The pause is provisional, not yet an interruption: the agent phase is
    /// left untouched and the episode can still be rescued by an interim
    /// backchannel before the grace period runs out. A new pause supersedes
    /// any previous episode's timer.
    pub async fn playback_paused(&self, playback: PausedPlayback) {
        let mut state = self.inner.state.lock().await;
        state.cancel_timer();
        state.paused_playback = Some(playback);

        let epoch = self.inner.pause_epoch.fetch_add(1, Ordering::AcqRel) + 1;
        let grace_ms = self.inner.config.false_interruption_grace_ms;
        let weak = Arc::downgrade(&self.inner);
        state.false_interruption_timer = Some(FalseInterruptionTimer::arm(
            epoch,
            Duration::from_millis(grace_ms),
            move || async move {
                if let Some(inner) = weak.upgrade() {
                    inner.finalize_interruption(epoch).await;
                }
            },
        ));
        debug!(
            "Playback paused - grace timer armed for episode {} ({}ms)",
            epoch, grace_ms
        );
    }
}

impl CoordinatorInner {
    /// Grace timer expiry: the pause was never explained away, so promote it
    /// to a committed interruption.
    ///
    /// Runs on the timer task. The epoch comparison happens under the session
    /// lock, so an expiry racing a cancellation (or a newer pause episode)
    /// resolves deterministically: only the currently armed timer may
    /// finalize, everything else is a no-op.
    async fn finalize_interruption(&self, epoch: u64) {
        let callback = {
            let mut state = self.state.lock().await;
            let live = state
                .false_interruption_timer
                .as_ref()
                .is_some_and(|timer| timer.epoch() == epoch);
            if !live {
                debug!("Stale grace timer expiry for episode {} ignored", epoch);
                return;
            }
            if let Some(timer) = state.false_interruption_timer.take() {
                timer.detach();
            }
            state.paused_playback = None;
            state.agent_state = AgentState::Listening;
            info!(
                "Grace period elapsed for episode {} - interruption finalized",
                epoch
            );
            self.config.on_finalized.clone()
        };

        // Invoked outside the session lock so a slow host callback cannot
        // stall the checkpoints.
        if let Some(callback) = callback {
            callback().await;
        }
    }
}
