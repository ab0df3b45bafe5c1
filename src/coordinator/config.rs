//! Configuration and host callback types for the coordinator.

use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use futures::Future;

use crate::classify::Lexicon;

/// Callback type for finalized interruptions.
///
/// Invoked after the grace timer expires and the pause is promoted to a
/// committed interruption, so the host can stop response generation and
/// flush any queued audio.
pub type FinalizedInterruptionCallback =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Configuration for the interruption coordinator.
#[derive(Clone)]
pub struct CoordinatorConfig {
    /// Word sets consulted by the utterance classifier.
    pub lexicon: Lexicon,
    /// Master switch for backchannel-triggered resume. When false, the
    /// interim checkpoint never rescues a pause and every interruption
    /// follows the default path.
    pub resume_false_interruption: bool,
    /// How long a provisional pause may stand unexplained before the grace
    /// timer promotes it to a committed interruption (ms).
    pub false_interruption_grace_ms: u64,
    /// Invoked when the grace timer finalizes an interruption.
    pub on_finalized: Option<FinalizedInterruptionCallback>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::default(),
            resume_false_interruption: true,
            false_interruption_grace_ms: 1000, // 1s before a pause becomes a real interruption
            on_finalized: None,
        }
    }
}

impl CoordinatorConfig {
    /// Create a configuration with default word sets and timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the classifier word sets.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Enable or disable backchannel-triggered resume.
    pub fn with_resume_false_interruption(mut self, enabled: bool) -> Self {
        self.resume_false_interruption = enabled;
        self
    }

    /// Set the grace period before a pause is finalized as an interruption.
    pub fn with_false_interruption_grace_ms(mut self, grace_ms: u64) -> Self {
        self.false_interruption_grace_ms = grace_ms;
        self
    }

    /// Register a callback fired when an interruption is finalized.
    pub fn with_on_finalized(mut self, callback: FinalizedInterruptionCallback) -> Self {
        self.on_finalized = Some(callback);
        self
    }
}

impl fmt::Debug for CoordinatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinatorConfig")
            .field("lexicon", &self.lexicon)
            .field("resume_false_interruption", &self.resume_false_interruption)
            .field(
                "false_interruption_grace_ms",
                &self.false_interruption_grace_ms,
            )
            .field("on_finalized", &self.on_finalized.is_some())
            .finish()
    }
}
