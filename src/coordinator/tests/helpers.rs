//! Shared test helpers for coordinator tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use crate::audio::{AudioOutput, AudioOutputError, AudioOutputResult, PausedPlayback};
use crate::coordinator::InterruptionCoordinator;
use crate::coordinator::config::CoordinatorConfig;

/// Stub audio output that records pause/resume calls.
///
/// Tracks:
/// - `pause_count` / `resume_count`: total invocations of each operation
/// - `last_resumed_token`: the token of the most recently resumed handle
///
/// Behavior is adjustable per test via `set_can_pause` and `fail_resume`.
pub struct RecordingAudioOutput {
    can_pause: AtomicBool,
    fail_resume: AtomicBool,
    pause_count: AtomicUsize,
    resume_count: AtomicUsize,
    last_resumed_token: AtomicU64,
}

impl RecordingAudioOutput {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            can_pause: AtomicBool::new(true),
            fail_resume: AtomicBool::new(false),
            pause_count: AtomicUsize::new(0),
            resume_count: AtomicUsize::new(0),
            last_resumed_token: AtomicU64::new(0),
        })
    }

    pub fn set_can_pause(&self, value: bool) {
        self.can_pause.store(value, Ordering::Release);
    }

    pub fn set_fail_resume(&self, value: bool) {
        self.fail_resume.store(value, Ordering::Release);
    }

    pub fn pause_count(&self) -> usize {
        self.pause_count.load(Ordering::Acquire)
    }

    pub fn resume_count(&self) -> usize {
        self.resume_count.load(Ordering::Acquire)
    }

    pub fn last_resumed_token(&self) -> u64 {
        self.last_resumed_token.load(Ordering::Acquire)
    }
}

#[async_trait::async_trait]
impl AudioOutput for RecordingAudioOutput {
    fn can_pause(&self) -> bool {
        self.can_pause.load(Ordering::Acquire)
    }

    async fn pause(&self) -> AudioOutputResult<PausedPlayback> {
        let count = self.pause_count.fetch_add(1, Ordering::AcqRel) + 1;
        Ok(PausedPlayback::new(count as u64))
    }

    async fn resume(&self, playback: PausedPlayback) -> AudioOutputResult<()> {
        if self.fail_resume.load(Ordering::Acquire) {
            return Err(AudioOutputError::Device("injected resume failure".into()));
        }
        self.resume_count.fetch_add(1, Ordering::AcqRel);
        self.last_resumed_token
            .store(playback.token(), Ordering::Release);
        Ok(())
    }
}

/// Coordinator with default configuration over the given output.
pub fn coordinator_over(output: Arc<RecordingAudioOutput>) -> InterruptionCoordinator {
    InterruptionCoordinator::new(CoordinatorConfig::default(), output)
}

/// Coordinator with a short grace period, for timer tests under paused time.
pub fn coordinator_with_grace_ms(
    output: Arc<RecordingAudioOutput>,
    grace_ms: u64,
) -> InterruptionCoordinator {
    let config = CoordinatorConfig::default().with_false_interruption_grace_ms(grace_ms);
    InterruptionCoordinator::new(config, output)
}

/// Drive the coordinator into the speaking-then-paused position most
/// checkpoint tests start from.
pub async fn speaking_with_pause(
    coordinator: &InterruptionCoordinator,
    output: &Arc<RecordingAudioOutput>,
) {
    coordinator.agent_speech_started().await;
    let handle = output.pause().await.expect("stub pause cannot fail");
    coordinator.playback_paused(handle).await;
}
