//! Progress reporting seam for the seeding stages.
//!
//! # Responsibility
//! - Decouple periodic observability from generation logic.
//!
//! # Invariants
//! - Sinks are side-effect only; generation results never depend on them.

use log::info;

/// Receiver for stage lifecycle and checkpoint notifications.
pub trait ProgressSink {
    /// Called once when a stage begins, with its target count.
    fn stage_started(&self, stage: &'static str, target: u64);
    /// Called at the stage's fixed cadence with the current index.
    fn checkpoint(&self, stage: &'static str, position: u64);
}

/// Sink that emits structured log events.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn stage_started(&self, stage: &'static str, target: u64) {
        info!("event=seed_stage module=seed status=start stage={stage} target={target}");
    }

    fn checkpoint(&self, stage: &'static str, position: u64) {
        info!("event=seed_progress module=seed stage={stage} position={position}");
    }
}

/// Sink that discards every notification.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn stage_started(&self, _stage: &'static str, _target: u64) {}

    fn checkpoint(&self, _stage: &'static str, _position: u64) {}
}
