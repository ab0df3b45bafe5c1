//! The three checkpoint handlers.
//!
//! Each checkpoint runs on a different signal path and any of them can be
//! skipped by upstream timing; together they guarantee that no backchannel
//! reaches response generation while a real interruption is never swallowed.

use tracing::{debug, info, warn};

use crate::classify::classify;
use crate::events::{EndOfTurn, TranscriptEvent};

use super::InterruptionCoordinator;
use super::state::AgentState;

/// Outcome of the interim-transcript checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterimOutcome {
    /// The utterance was adjudicated backchannel: any paused audio was
    /// resumed and the normal interruption path is suppressed.
    KeepSpeaking,
    /// Default interruption handling applies (pause / prepare to stop).
    Interrupt,
}

/// Outcome of the final-transcript checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalOutcome {
    /// Drop this transcript: no history append, no turn assembly.
    DiscardTranscript,
    /// Proceed with normal handling (append to history, assemble the turn).
    CommitTranscript,
}

/// Outcome of routing a [`TranscriptEvent`] to its checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptOutcome {
    /// The event was an interim transcript, handled by checkpoint 1.
    Interim(InterimOutcome),
    /// The event was a final transcript, handled by checkpoint 2.
    Final(FinalOutcome),
}

impl InterruptionCoordinator {
    /// Checkpoint 1: adjudicate an interim transcript.
    ///
    /// Fires on every partial transcription update, zero or many times per
    /// utterance. When the text is a bare acknowledgement and agent playback
    /// was provisionally paused (or is still running), the pause is undone
    /// instead of escalated: audio resumes, the grace timer is cancelled and
    /// the backchannel flag is carried forward for the later checkpoints.
    ///
    /// Preconditions are checked in order; the first failure falls through to
    /// [`InterimOutcome::Interrupt`], the default interruption path that
    /// existed before backchannel awareness. This method never errors: a
    /// failed resume call is logged and degraded to the same outcome.
    ///
    /// # Arguments
    /// * `text` - The interim transcript text as delivered by the
    ///   transcription collaborator
    ///
    /// # Returns
    /// * `InterimOutcome` - Whether the host should let the agent keep
    ///   speaking or run its default interruption handling
    pub async fn on_interim_transcript(&self, text: &str) -> InterimOutcome {
        let mut state = self.inner.state.lock().await;

        if text.trim().is_empty() {
            return InterimOutcome::Interrupt;
        }
        if !classify(text, &self.inner.config.lexicon).is_backchannel() {
            debug!("Interim transcript is substantive - default interruption path");
            return InterimOutcome::Interrupt;
        }
        // The activity monitor and the transcript source are independently
        // clocked: a pause may already be recorded, or this interim may have
        // raced ahead of it while the agent is still speaking.
        if state.paused_playback.is_none() && state.agent_state != AgentState::Speaking {
            debug!("Backchannel outside agent speech - nothing to rescue");
            return InterimOutcome::Interrupt;
        }
        if !self.inner.config.resume_false_interruption {
            return InterimOutcome::Interrupt;
        }
        if !self.inner.audio.can_pause() {
            debug!("Audio output cannot pause - backchannel resume unavailable");
            return InterimOutcome::Interrupt;
        }

        // Commit point. The session lock stays held across the resume call so
        // checkpoints 2 and 3 can never observe a half-applied episode.
        let rescued = state.paused_playback.take();
        let had_pause = rescued.is_some();
        if let Some(playback) = rescued {
            if let Err(error) = self.inner.audio.resume(playback).await {
                // The episode stays an interruption; the grace timer, if
                // armed, finalizes it even if the host ignores the outcome.
                warn!(
                    "Resume after backchannel failed: {} - treating as real interruption",
                    error
                );
                return InterimOutcome::Interrupt;
            }
        }
        state.agent_state = AgentState::Speaking;
        state.cancel_timer();
        state.last_transcript_was_backchannel = true;
        if had_pause {
            info!("Backchannel rescued paused playback - agent keeps speaking");
        } else {
            debug!("Backchannel while agent still speaking - carrying flag forward");
        }
        InterimOutcome::KeepSpeaking
    }

    /// Checkpoint 2: gate a final transcript before it reaches conversation
    /// history.
    ///
    /// Suppression requires checkpoint 1 to have already committed to the
    /// backchannel reading. A final transcript is never adjudicated on its
    /// own authority: an interim-only classification could be stale against
    /// the revised final text, and an utterance whose interim events never
    /// arrived is deliberately treated as substantive rather than silently
    /// dropped.
    ///
    /// # Returns
    /// * `FinalOutcome` - Whether the host should append the transcript to
    ///   history and continue turn assembly, or drop it
    pub async fn on_final_transcript(&self, text: &str) -> FinalOutcome {
        let state = self.inner.state.lock().await;

        if text.trim().is_empty() {
            return FinalOutcome::CommitTranscript;
        }
        if !classify(text, &self.inner.config.lexicon).is_backchannel() {
            return FinalOutcome::CommitTranscript;
        }
        if !state.last_transcript_was_backchannel {
            // Conservative by design: with no interim adjudication a fast
            // acknowledgement-only utterance still counts as substantive.
            return FinalOutcome::CommitTranscript;
        }
        debug!("Final transcript \"{}\" suppressed - backchannel already adjudicated", text);
        FinalOutcome::DiscardTranscript
    }

    /// Checkpoint 3: gate response generation at end-of-turn.
    ///
    /// The terminal safety net: even if the earlier checkpoints were bypassed
    /// by timing, no backchannel reaches response generation. The backchannel
    /// flag is reset on every path through this method, so a turn boundary
    /// can never leak the flag into an unrelated future turn.
    ///
    /// # Returns
    /// * `bool` - True when the turn processor should generate a response,
    ///   false when generation must be suppressed for this turn
    pub async fn on_end_of_turn(&self, turn: &EndOfTurn) -> bool {
        let mut state = self.inner.state.lock().await;

        let was_backchannel = state.last_transcript_was_backchannel;
        state.last_transcript_was_backchannel = false;

        if was_backchannel
            && classify(&turn.new_transcript, &self.inner.config.lexicon).is_backchannel()
        {
            info!("Backchannel turn complete - response generation suppressed");
            return false;
        }
        debug!("End of turn - proceeding to response generation");
        true
    }

    /// Route a transcript event to the matching checkpoint.
    pub async fn on_transcript(&self, event: &TranscriptEvent) -> TranscriptOutcome {
        match event {
            TranscriptEvent::Interim { text } => {
                TranscriptOutcome::Interim(self.on_interim_transcript(text).await)
            }
            TranscriptEvent::Final { text } => {
                TranscriptOutcome::Final(self.on_final_transcript(text).await)
            }
        }
    }
}
