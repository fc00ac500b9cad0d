//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use focus_sense_core::domain::{Recording, SessionResult};
use focus_sense_core::ports::{FrameSource, ProgressEvent, ProgressSink, ResultOutput};

/// Shared append-only capture buffer used by the mocks.
#[derive(Debug)]
struct Capture<T>(Arc<Mutex<Vec<T>>>);

impl<T> Capture<T> {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    fn push(&self, item: T) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).push(item);
    }
}

impl<T: Clone> Capture<T> {
    fn snapshot(&self) -> Vec<T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl<T> Default for Capture<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One scripted item a [`MockFrameSource`] will yield.
enum Scripted {
    Recording(Recording),
    Failure(String),
}

/// Mock implementation of `FrameSource` for testing.
///
/// Yields a scripted sequence of recordings and per-item failures, and
/// tracks how often it was iterated.
pub struct MockFrameSource {
    script: Vec<Scripted>,
    iterations: Capture<()>,
}

impl MockFrameSource {
    /// Creates a mock source yielding the given recordings.
    #[must_use]
    pub fn new(recordings: Vec<Recording>) -> Self {
        Self {
            script: recordings.into_iter().map(Scripted::Recording).collect(),
            iterations: Capture::new(),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Appends a recording that loads successfully.
    #[must_use]
    pub fn with_recording(mut self, recording: Recording) -> Self {
        self.script.push(Scripted::Recording(recording));
        self
    }

    /// Appends an item that fails to load with the given message.
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.script.push(Scripted::Failure(message.into()));
        self
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        self.iterations.snapshot().len()
    }
}

impl FrameSource for MockFrameSource {
    fn recordings(&self) -> Box<dyn Iterator<Item = anyhow::Result<Recording>> + Send + '_> {
        self.iterations.push(());
        Box::new(self.script.iter().map(|item| match item {
            Scripted::Recording(rec) => Ok(rec.clone()),
            Scripted::Failure(msg) => Err(anyhow::anyhow!("{msg}")),
        }))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.script.len())
    }
}

/// Mock implementation of `ResultOutput` capturing everything written.
#[derive(Default)]
pub struct MockResultOutput {
    results: Capture<SessionResult>,
    flushes: Capture<()>,
}

impl MockResultOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured results.
    #[must_use]
    pub fn results(&self) -> Vec<SessionResult> {
        self.results.snapshot()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flushes.snapshot().len()
    }
}

impl ResultOutput for MockResultOutput {
    fn write(&self, result: &SessionResult) -> anyhow::Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        self.flushes.push(());
        Ok(())
    }
}

/// Mock implementation of `ProgressSink` capturing emitted events.
#[derive(Default)]
pub struct MockProgressSink {
    events: Capture<ProgressEvent>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.snapshot()
    }

    /// Counts captured events matching `predicate`.
    fn count_where(&self, predicate: impl Fn(&ProgressEvent) -> bool) -> usize {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// Returns the number of `Started` events.
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.count_where(|e| matches!(e, ProgressEvent::Started { .. }))
    }

    /// Returns the number of `Completed` events.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.count_where(|e| matches!(e, ProgressEvent::Completed { .. }))
    }

    /// Returns the number of `Skipped` events.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count_where(|e| matches!(e, ProgressEvent::Skipped { .. }))
    }

    /// Returns the final counts from the `Finished` event, if any.
    #[must_use]
    pub fn finished_counts(&self) -> Option<(usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished { processed, skipped } => Some((*processed, *skipped)),
            _ => None,
        })
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events.push(event);
    }
}
