//! Stateful focus classification session.

use tracing::trace;

use crate::domain::{FocusReading, FocusState, LandmarkSet};

use super::blink::BlinkWindow;
use super::config::ClassifierConfig;
use super::ear::{eye_metrics, OPEN_EYE_EAR};
use super::gaze::is_looking_at_screen;

/// One monitoring session's classifier state.
///
/// A session owns exactly two pieces of retained state: the previous
/// frame's averaged EAR (for blink edge detection) and the bounded
/// blink-sample window. Everything else is recomputed per frame.
///
/// `classify` takes `&mut self`, so the borrow checker enforces the
/// one-caller-at-a-time sequencing the blink edge depends on. Run
/// parallel monitoring sessions on independent `FocusSession` values,
/// never a shared one.
#[derive(Debug, Clone)]
pub struct FocusSession {
    config: ClassifierConfig,
    blinks: BlinkWindow,
    last_ear: f32,
}

impl FocusSession {
    /// Creates a session with the given thresholds.
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            blinks: BlinkWindow::new(),
            last_ear: OPEN_EYE_EAR,
        }
    }

    /// The thresholds this session classifies with.
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies one frame's face.
    ///
    /// The caller must pre-filter to the single-face case; this method
    /// assumes `face` is the one detected face. Degenerate geometry
    /// never fails: missing or malformed landmarks fall back to
    /// documented open-eye / looking-at-screen defaults.
    pub fn classify(&mut self, face: &LandmarkSet) -> FocusReading {
        let metrics = eye_metrics(face);

        // Falling-edge crossing of the blink threshold. A sustained
        // closure counts once: the retained slot is overwritten, so
        // consecutive low frames cannot re-trigger.
        let blink_detected = self.last_ear > self.config.blink_ear_threshold
            && metrics.average_ear <= self.config.blink_ear_threshold;
        self.last_ear = metrics.average_ear;

        self.blinks.push(blink_detected);
        let blink_rate = self.blinks.rate_per_minute();

        let looking = is_looking_at_screen(face, self.config.gaze_depth_ratio);

        let focus_state = self.decide(looking, metrics.average_ear, blink_rate);

        trace!(
            avg_ear = metrics.average_ear,
            blink_rate,
            looking,
            state = focus_state.as_str(),
            "classified frame"
        );

        FocusReading {
            focus_state,
            left_ear: metrics.left_ear,
            right_ear: metrics.right_ear,
            average_ear: metrics.average_ear,
            is_looking_at_screen: looking,
            blink_detected,
            blink_rate,
        }
    }

    /// Priority-ordered state decision; first matching rule wins.
    fn decide(&self, looking: bool, average_ear: f32, blink_rate: f32) -> FocusState {
        let c = &self.config;

        if !looking {
            return FocusState::Neutral;
        }
        if average_ear < c.drowsy_ear_threshold {
            return FocusState::Neutral;
        }
        if blink_rate > c.high_blink_rate {
            return FocusState::Stressed;
        }
        if blink_rate < c.low_blink_rate && average_ear > c.focused_ear_floor {
            return FocusState::Focused;
        }
        if blink_rate >= c.low_blink_rate
            && blink_rate <= c.steady_blink_rate
            && average_ear > c.steady_ear_floor
        {
            return FocusState::Focused;
        }
        // Covers the elevated band (steady..=high) and every leftover
        // combination.
        FocusState::Neutral
    }

    /// Discards all retained state for a fresh monitoring session.
    ///
    /// Clears the blink window and restores the retained EAR to its
    /// open-eye default, so the first post-reset frame cannot register
    /// a blink from the reset transition alone.
    pub fn reset(&mut self) {
        self.blinks.clear();
        self.last_ear = OPEN_EYE_EAR;
    }

    /// Samples currently held in the blink window.
    #[must_use]
    pub fn blink_samples(&self) -> usize {
        self.blinks.len()
    }
}

impl Default for FocusSession {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
