//! Tests for the interruption coordinator.
//!
//! Organized into focused modules:
//! - `checkpoint_flow`: the three checkpoints and the flag threaded between them
//! - `degradation`: feature switch off, missing capability, failing resume
//! - `grace_timer`: arming, cancellation, expiry and episode supersession
//! - `sessions`: cross-session independence and handler serialization
//!
//! Shared test utilities are in the `helpers` module.

mod helpers;

mod grace_timer;
