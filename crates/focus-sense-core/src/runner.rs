//! Session runner: drives a recording through a fresh classifier.

use tracing::debug;

use crate::classifier::{ClassifierConfig, FocusSession};
use crate::domain::{FrameRecord, FrameStatus, Recording, SessionResult, SessionSummary};

/// Analyzes one recording with a fresh session.
///
/// Frames with zero or more than one face never reach the classifier;
/// they are recorded as [`FrameStatus::NoFace`] /
/// [`FrameStatus::MultipleFaces`] and counted in the summary. The
/// `timestamp` is stamped by the caller so the runner stays
/// deterministic: identical frame sequences yield identical results.
#[must_use]
pub fn run_session(
    recording: &Recording,
    config: ClassifierConfig,
    timestamp: String,
    keep_frames: bool,
) -> SessionResult {
    let mut session = FocusSession::new(config);
    let mut summary = SessionSummary::default();
    let mut records = keep_frames.then(|| Vec::with_capacity(recording.frames.len()));

    for (index, frame) in recording.frames.iter().enumerate() {
        let (status, reading) = match frame.faces.as_slice() {
            [] => {
                summary.no_face += 1;
                (FrameStatus::NoFace, None)
            }
            [face] => {
                let reading = session.classify(face);
                summary.record(&reading);
                (FrameStatus::Analyzed, Some(reading))
            }
            _ => {
                summary.multiple_faces += 1;
                (FrameStatus::MultipleFaces, None)
            }
        };

        if let Some(records) = records.as_mut() {
            records.push(FrameRecord {
                index,
                timestamp_ms: frame.timestamp_ms,
                status,
                reading,
            });
        }
    }

    summary.finalize();

    debug!(
        path = %recording.path,
        analyzed = summary.analyzed(),
        no_face = summary.no_face,
        blinks = summary.blinks,
        "session complete"
    );

    SessionResult {
        path: recording.path.clone(),
        timestamp,
        frames_total: recording.frames.len(),
        summary,
        frames: records,
    }
}
