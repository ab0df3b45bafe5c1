//! Read-only inspection of coordinator state.

use super::InterruptionCoordinator;
use super::state::{AgentState, SpeechPhase};

impl InterruptionCoordinator {
    /// Current externally observable agent phase.
    pub async fn agent_state(&self) -> AgentState {
        let state = self.inner.state.lock().await;
        state.agent_state
    }

    /// Composite speech phase derived from the session state.
    pub async fn phase(&self) -> SpeechPhase {
        let state = self.inner.state.lock().await;
        state.phase()
    }

    /// Whether the current utterance was adjudicated backchannel at the
    /// interim checkpoint and end-of-turn has not yet closed it.
    pub async fn last_transcript_was_backchannel(&self) -> bool {
        let state = self.inner.state.lock().await;
        state.last_transcript_was_backchannel
    }

    /// Whether a provisional pause episode is outstanding.
    pub async fn is_paused(&self) -> bool {
        let state = self.inner.state.lock().await;
        state.paused_playback.is_some()
    }

    /// Whether a grace timer is currently armed.
    pub async fn grace_timer_armed(&self) -> bool {
        let state = self.inner.state.lock().await;
        state.false_interruption_timer.is_some()
    }
}
