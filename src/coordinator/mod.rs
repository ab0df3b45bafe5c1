//! # Interruption Coordinator
//!
//! Per-session state machine that reconciles voice activity, transcription,
//! and end-of-turn detection into one interruption decision per utterance.
//! The three signal sources run on independent timelines, so any of them can
//! arrive first or not arrive at all.
//!
//! # Pause Lifecycle
//!
//! ```text
//!                agent_speech_started()              playback_paused(handle)
//! IDLE/LISTENING ──────────────────► SPEAKING ──────────────────► PAUSED
//!       ▲                               ▲                            │
//!       │                               │ interim backchannel:       │
//!       │                               │ resume + carry flag        │
//!       │                               └────────────────────────────┤
//!       │                                                            │
//!       └──────── grace timer expiry: interruption finalized ◄───────┘
//! ```
//!
//! Three checkpoints gate the utterance on its way through the pipeline, each
//! on a different signal path so any one of them can be skipped by timing:
//!
//! ```text
//! checkpoint 1   on_interim_transcript   may resume paused audio, sets flag
//! checkpoint 2   on_final_transcript     gates history append, needs flag
//! checkpoint 3   on_end_of_turn          gates response generation, clears flag
//! ```
//!
//! The flag threaded between them records "this utterance was already
//! adjudicated as a backchannel". Checkpoints 2 and 3 only suppress when
//! checkpoint 1 set it: a final transcript is never adjudicated on its own
//! authority, so an utterance whose interim events never arrived is treated
//! as substantive. The safe failure direction is an unwanted interruption,
//! never a stuck agent.

mod checkpoints;
pub mod config;
mod info;
mod lifecycle;
pub mod state;
pub mod timer;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use tokio::sync::Mutex;

use crate::audio::AudioOutput;

use self::config::CoordinatorConfig;

pub use checkpoints::{FinalOutcome, InterimOutcome, TranscriptOutcome};
pub use config::FinalizedInterruptionCallback;
pub use state::{AgentState, SessionSpeechState, SpeechPhase};
pub use timer::FalseInterruptionTimer;

/// Coordinates backchannel-aware interruption decisions for one dialogue
/// session.
///
/// Cheap to clone; every clone shares the same session state, so each signal
/// source (activity monitor, transcript source, turn detector) can hold its
/// own handle. Concurrent sessions get independent coordinators and share
/// nothing mutable.
///
/// All event handlers serialize on one session lock, held across the whole
/// handler body. An interim-transcript resume and a final-transcript
/// suppression for the same utterance can therefore never race.
#[derive(Clone)]
pub struct InterruptionCoordinator {
    inner: Arc<CoordinatorInner>,
}

struct CoordinatorInner {
    config: CoordinatorConfig,
    audio: Arc<dyn AudioOutput>,
    /// Session state; the lock is held across whole checkpoint bodies so the
    /// three handlers never interleave.
    state: Mutex<SessionSpeechState>,
    /// Monotonic pause-episode counter. A grace timer armed for an older
    /// episode can never finalize a newer one.
    pause_epoch: AtomicU64,
}

// Compile-time assertion that the coordinator can be shared across the event
// sources' tasks.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<InterruptionCoordinator>;
};

impl InterruptionCoordinator {
    /// Create a coordinator for one dialogue session.
    ///
    /// # Arguments
    /// * `config` - Word sets, feature switch and grace timing
    /// * `audio` - The host's playback control surface
    pub fn new(config: CoordinatorConfig, audio: Arc<dyn AudioOutput>) -> Self {
        Self {
            inner: Arc::new(CoordinatorInner {
                config,
                audio,
                state: Mutex::new(SessionSpeechState::new()),
                pause_epoch: AtomicU64::new(0),
            }),
        }
    }

    /// Create a coordinator with default configuration.
    pub fn with_defaults(audio: Arc<dyn AudioOutput>) -> Self {
        Self::new(CoordinatorConfig::default(), audio)
    }
}
