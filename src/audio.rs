//! Audio output adapter seam.
//!
//! The coordinator never talks to a playback engine directly; it drives this
//! trait, which the host implements over whatever actually plays agent audio
//! (a LiveKit track, a WebRTC sink, a local device, a test double).

/// Error types for audio output operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum AudioOutputError {
    /// The backend cannot suspend playback mid-utterance.
    #[error("Pause is not supported by this audio output")]
    PauseUnsupported,
    /// The underlying device or transport failed.
    #[error("Audio device error: {0}")]
    Device(String),
    /// The output was shut down while an operation was in flight.
    #[error("Audio output closed")]
    Closed,
}

/// Result type for audio output operations
pub type AudioOutputResult<T> = Result<T, AudioOutputError>;

/// Opaque handle to a suspended playback operation.
///
/// Produced by [`AudioOutput::pause`] and handed back to
/// [`AudioOutput::resume`]. The coordinator stores it while an utterance is
/// paused but never looks inside; the token is whatever the host needs to
/// find its resume position again (a sample offset, a segment id, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PausedPlayback {
    token: u64,
}

impl PausedPlayback {
    /// Wrap a host-defined resume token.
    pub fn new(token: u64) -> Self {
        Self { token }
    }

    /// The host-defined resume token.
    pub fn token(&self) -> u64 {
        self.token
    }
}

/// Playback control surface the coordinator requires from the host.
///
/// Implementations must tolerate redundant calls: resuming a stream that is
/// already playing and pausing one that is already paused are safe no-ops,
/// not errors. The coordinator leans on this when independently clocked
/// signal sources race.
///
/// The coordinator calls [`resume`](AudioOutput::resume) while holding its
/// session lock, so implementations must not call back into the coordinator
/// from inside these methods.
#[async_trait::async_trait]
pub trait AudioOutput: Send + Sync {
    /// Whether this output can suspend playback mid-utterance.
    ///
    /// When false, backchannel-triggered resume is unavailable and every
    /// interruption follows the default stop path.
    fn can_pause(&self) -> bool;

    /// Suspend playback, returning a handle that can resume it later.
    async fn pause(&self) -> AudioOutputResult<PausedPlayback>;

    /// Resume playback previously suspended by [`pause`](AudioOutput::pause).
    async fn resume(&self, playback: PausedPlayback) -> AudioOutputResult<()>;
}
