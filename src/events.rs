//! Event types delivered by the transcription and turn-detection
//! collaborators.
//!
//! These are the coordinator's inputs. The host's speech-to-text integration
//! produces [`TranscriptEvent`]s as recognition progresses; its turn detector
//! produces an [`EndOfTurn`] once it judges the user finished speaking.

/// A transcription update from the speech-to-text collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Provisional transcription; may be revised before the utterance ends.
    Interim { text: String },
    /// The engine's completed, non-revisable output for an utterance.
    Final { text: String },
}

impl TranscriptEvent {
    /// The transcription text carried by this event.
    pub fn text(&self) -> &str {
        match self {
            TranscriptEvent::Interim { text } | TranscriptEvent::Final { text } => text,
        }
    }

    /// True for interim (pre-final) updates.
    pub fn is_interim(&self) -> bool {
        matches!(self, TranscriptEvent::Interim { .. })
    }
}

/// End-of-turn signal from the turn detector, carrying the transcript of the
/// user turn it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOfTurn {
    /// Transcript accumulated for the turn being closed.
    pub new_transcript: String,
}

impl EndOfTurn {
    /// Create an end-of-turn event for the given turn transcript.
    pub fn new(new_transcript: impl Into<String>) -> Self {
        Self {
            new_transcript: new_transcript.into(),
        }
    }
}
