//! # Murmur
//!
//! Backchannel-aware interruption coordination for spoken-dialogue agents.
//!
//! This crate provides [`InterruptionCoordinator`], which decides whether
//! user speech arriving while an agent is talking should interrupt it.
//! Passive acknowledgements ("yeah", "uh-huh") let the agent keep speaking;
//! commands and substantive speech ("wait", "can you repeat that") stop it.
//! The decision reconciles three independently timed signals carrying the
//! same utterance: voice activity, interim and final transcripts, and
//! end-of-turn detection.
//!
//! The crate is transport-agnostic. Hosts implement [`AudioOutput`] over
//! their playback engine, construct one coordinator per dialogue session,
//! and feed it the events their pipeline already produces.

pub mod audio;
pub mod classify;
pub mod coordinator;
pub mod events;

// Re-export commonly used items for convenience
pub use audio::{AudioOutput, AudioOutputError, AudioOutputResult, PausedPlayback};
pub use classify::{Lexicon, UtteranceClass, classify};
pub use coordinator::config::CoordinatorConfig;
pub use coordinator::{
    AgentState, FinalOutcome, FinalizedInterruptionCallback, InterimOutcome,
    InterruptionCoordinator, SessionSpeechState, SpeechPhase, TranscriptOutcome,
};
pub use events::{EndOfTurn, TranscriptEvent};
