//! Grace timer behavior driven through the coordinator's public surface.
//!
//! All tests run under paused virtual time so expiry is deterministic.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::time::Duration;

use super::helpers::{RecordingAudioOutput, coordinator_with_grace_ms, speaking_with_pause};
use crate::audio::PausedPlayback;
use crate::coordinator::InterruptionCoordinator;
use crate::coordinator::config::CoordinatorConfig;
use crate::coordinator::state::AgentState;

/// Coordinator with a counting finalize callback and the given grace period.
fn coordinator_with_finalize_counter(
    output: Arc<RecordingAudioOutput>,
    grace_ms: u64,
) -> (InterruptionCoordinator, Arc<AtomicUsize>) {
    let finalized = Arc::new(AtomicUsize::new(0));
    let counter = finalized.clone();
    let config = CoordinatorConfig::default()
        .with_false_interruption_grace_ms(grace_ms)
        .with_on_finalized(Arc::new(move || {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        }));
    (InterruptionCoordinator::new(config, output), finalized)
}

#[tokio::test(start_paused = true)]
async fn test_expiry_finalizes_interruption() {
    let output = RecordingAudioOutput::new();
    let (coordinator, finalized) = coordinator_with_finalize_counter(output.clone(), 100);
    speaking_with_pause(&coordinator, &output).await;

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(finalized.load(Ordering::SeqCst), 1);
    assert_eq!(coordinator.agent_state().await, AgentState::Listening);
    assert!(!coordinator.is_paused().await);
    assert!(!coordinator.grace_timer_armed().await);
}

#[tokio::test(start_paused = true)]
async fn test_expiry_fires_once() {
    let output = RecordingAudioOutput::new();
    let (coordinator, finalized) = coordinator_with_finalize_counter(output.clone(), 100);
    speaking_with_pause(&coordinator, &output).await;

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(finalized.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_backchannel_cancels_grace_timer() {
    let output = RecordingAudioOutput::new();
    let (coordinator, finalized) = coordinator_with_finalize_counter(output.clone(), 100);
    speaking_with_pause(&coordinator, &output).await;

    coordinator.on_interim_transcript("yeah").await;
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(finalized.load(Ordering::SeqCst), 0);
    assert_eq!(coordinator.agent_state().await, AgentState::Speaking);
}

#[tokio::test(start_paused = true)]
async fn test_new_pause_supersedes_previous_timer() {
    let output = RecordingAudioOutput::new();
    let (coordinator, finalized) = coordinator_with_finalize_counter(output.clone(), 100);
    coordinator.agent_speech_started().await;

    coordinator.playback_paused(PausedPlayback::new(1)).await;
    tokio::time::sleep(Duration::from_millis(60)).await;

    // A second pause re-arms the timer; the first episode's deadline passes
    // without firing
    coordinator.playback_paused(PausedPlayback::new(2)).await;
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(finalized.load(Ordering::SeqCst), 0);
    assert!(coordinator.is_paused().await);

    // The second episode's own deadline still fires
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(finalized.load(Ordering::SeqCst), 1);
    assert_eq!(coordinator.agent_state().await, AgentState::Listening);
}

#[tokio::test(start_paused = true)]
async fn test_agent_speech_finished_disarms_timer() {
    let output = RecordingAudioOutput::new();
    let (coordinator, finalized) = coordinator_with_finalize_counter(output.clone(), 100);
    speaking_with_pause(&coordinator, &output).await;

    coordinator.agent_speech_finished(true).await;
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(finalized.load(Ordering::SeqCst), 0);
    assert_eq!(coordinator.agent_state().await, AgentState::Listening);
}

#[tokio::test(start_paused = true)]
async fn test_expiry_without_callback_still_finalizes_state() {
    let output = RecordingAudioOutput::new();
    let coordinator = coordinator_with_grace_ms(output.clone(), 100);
    speaking_with_pause(&coordinator, &output).await;

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(coordinator.agent_state().await, AgentState::Listening);
    assert!(!coordinator.is_paused().await);
    assert!(!coordinator.grace_timer_armed().await);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_coordinator_never_fires_callback() {
    let output = RecordingAudioOutput::new();
    let (coordinator, finalized) = coordinator_with_finalize_counter(output.clone(), 100);
    speaking_with_pause(&coordinator, &output).await;

    drop(coordinator);
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(finalized.load(Ordering::SeqCst), 0);
}
