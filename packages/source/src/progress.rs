//! Progress reporting for the per-parent remote fan-out.
//!
//! Fetching regencies live means one request per province, each of which
//! may spend up to a few seconds in retries. [`ProgressCallback`] lets the
//! caller render that however it likes; [`NullProgress`] discards it.

use std::sync::Arc;

/// Receives progress updates from long-running fetches.
pub trait ProgressCallback: Send + Sync {
    /// Sets the number of units expected.
    fn set_total(&self, total: u64);

    /// Advances by `delta` units.
    fn inc(&self, delta: u64);

    /// Replaces the message shown next to the indicator.
    fn set_message(&self, msg: String);

    /// Marks the work as complete.
    fn finish(&self, msg: String);

    /// Marks the work as complete and removes the indicator.
    fn finish_and_clear(&self);
}

/// Ignores every update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
    fn finish_and_clear(&self) {}
}

/// Shared [`NullProgress`] handle.
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
