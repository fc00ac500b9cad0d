//! Session-level result types.

use serde::{Deserialize, Serialize};

use super::{FocusReading, FocusState};

/// What happened to one frame in the pipeline.
///
/// Zero-face and many-face frames are surfaced as their own states
/// rather than passed to the classifier, which only ever sees exactly
/// one face.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStatus {
    /// No face detected in the frame.
    NoFace,
    /// More than one face detected; classification not attempted.
    MultipleFaces,
    /// Exactly one face; the classifier produced a reading.
    Analyzed,
}

/// Per-frame record in a session report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Position in the recording (0-based).
    pub index: usize,
    /// Capture time in milliseconds, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<f64>,
    /// Pipeline outcome for this frame.
    pub status: FrameStatus,
    /// Classifier output; present only for `Analyzed` frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<FocusReading>,
}

/// Aggregate statistics over one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Frames classified focused.
    pub focused: usize,
    /// Frames classified neutral.
    pub neutral: usize,
    /// Frames classified stressed.
    pub stressed: usize,
    /// Frames with no face detected.
    pub no_face: usize,
    /// Frames with multiple faces detected.
    pub multiple_faces: usize,
    /// Blinks registered across the session.
    pub blinks: usize,
    /// Most frequent analyzed state; `None` when no frame was analyzed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_state: Option<FocusState>,
}

impl SessionSummary {
    /// Frames the classifier actually saw.
    #[must_use]
    pub const fn analyzed(&self) -> usize {
        self.focused + self.neutral + self.stressed
    }

    /// Records one analyzed frame's reading into the counts.
    pub fn record(&mut self, reading: &FocusReading) {
        match reading.focus_state {
            FocusState::Focused => self.focused += 1,
            FocusState::Neutral => self.neutral += 1,
            FocusState::Stressed => self.stressed += 1,
        }
        if reading.blink_detected {
            self.blinks += 1;
        }
    }

    /// Recomputes the dominant state from the counts.
    ///
    /// Ties resolve focused > neutral > stressed, so a session is only
    /// called stressed when stress strictly outweighs the rest.
    pub fn finalize(&mut self) {
        if self.analyzed() == 0 {
            self.dominant_state = None;
            return;
        }
        let mut best = (FocusState::Focused, self.focused);
        for candidate in [
            (FocusState::Neutral, self.neutral),
            (FocusState::Stressed, self.stressed),
        ] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        self.dominant_state = Some(best.0);
    }
}

/// Complete analysis result for one recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    /// Path to the analyzed recording.
    pub path: String,
    /// Timestamp of analysis (ISO 8601).
    pub timestamp: String,
    /// Total frames in the recording.
    pub frames_total: usize,
    /// Aggregate statistics.
    pub summary: SessionSummary,
    /// Per-frame records, included on request only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<FrameRecord>>,
}
