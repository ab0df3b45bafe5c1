//! Per-session speech state owned by the coordinator.

use crate::audio::PausedPlayback;

use super::timer::FalseInterruptionTimer;

/// Externally observable phase of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    /// No turn in progress.
    Idle,
    /// The agent is producing audio.
    Speaking,
    /// The agent is waiting on user speech.
    Listening,
}

/// Composite speech phase derived from the underlying state fields, for
/// logging and diagnostics. Not stored anywhere; [`SessionSpeechState::phase`]
/// computes it on demand so it can never drift from the fields it summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechPhase {
    /// Agent audio playing, no pause outstanding.
    SpeakingClean,
    /// Agent audio provisionally paused, utterance not yet adjudicated.
    SpeakingPaused,
    /// Agent audio paused and the current utterance already adjudicated as a
    /// backchannel (a transient phase: the interim checkpoint resumes audio
    /// in the same critical section that sets the flag).
    SpeakingPausedBackchannelPending,
    /// No agent audio in flight.
    IdleOrListening,
}

/// Mutable state for one dialogue session.
///
/// Owned behind the coordinator's session lock; one instance per session,
/// never shared across sessions, reset at the start of each turn cycle.
#[derive(Debug)]
pub struct SessionSpeechState {
    /// Externally observable agent phase.
    pub agent_state: AgentState,
    /// Handle to suspended playback. Present iff agent audio was paused
    /// mid-utterance and not yet resumed or finally stopped.
    pub paused_playback: Option<PausedPlayback>,
    /// True exactly between an interim-checkpoint backchannel adjudication
    /// and the end-of-turn that closes the same utterance.
    pub last_transcript_was_backchannel: bool,
    /// Grace timer armed while a pause stands unexplained.
    pub false_interruption_timer: Option<FalseInterruptionTimer>,
}

impl SessionSpeechState {
    /// Fresh state for a session with no turn in progress.
    pub fn new() -> Self {
        Self {
            agent_state: AgentState::Idle,
            paused_playback: None,
            last_transcript_was_backchannel: false,
            false_interruption_timer: None,
        }
    }

    /// Derive the composite phase from the current fields.
    pub fn phase(&self) -> SpeechPhase {
        match (&self.paused_playback, self.agent_state) {
            (Some(_), _) if self.last_transcript_was_backchannel => {
                SpeechPhase::SpeakingPausedBackchannelPending
            }
            (Some(_), _) => SpeechPhase::SpeakingPaused,
            (None, AgentState::Speaking) => SpeechPhase::SpeakingClean,
            (None, _) => SpeechPhase::IdleOrListening,
        }
    }

    /// Cancel the grace timer if one is armed. Idempotent: a second call
    /// finds nothing to cancel.
    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.false_interruption_timer.take() {
            timer.cancel();
        }
    }

    /// Clear pause bookkeeping and the backchannel flag for a fresh turn
    /// cycle. The agent phase itself is set by the caller.
    pub fn reset_for_new_turn(&mut self) {
        self.paused_playback = None;
        self.last_transcript_was_backchannel = false;
        self.cancel_timer();
    }
}

impl Default for SessionSpeechState {
    fn default() -> Self {
        Self::new()
    }
}
