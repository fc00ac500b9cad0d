//! Progress reporting port for UI integration.

use crate::domain::SessionResult;

/// Events emitted during analysis for progress tracking.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Analysis started for a recording.
    Started {
        /// Path to the recording.
        path: String,
        /// Index in the batch (0-based).
        index: usize,
        /// Total recordings in batch, if known.
        total: Option<usize>,
    },
    /// Analysis completed for a recording.
    Completed {
        /// The session result.
        result: SessionResult,
    },
    /// A recording was skipped due to an error.
    Skipped {
        /// Path to the recording.
        path: String,
        /// Reason for skipping.
        reason: String,
    },
    /// All recordings have been processed.
    Finished {
        /// Total recordings processed successfully.
        processed: usize,
        /// Total recordings skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
