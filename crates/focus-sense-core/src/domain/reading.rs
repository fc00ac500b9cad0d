//! Per-frame classification output types.

use serde::{Deserialize, Serialize};

/// Coarse three-way attention classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusState {
    /// Engaged attention: steady gaze, calm blink rate, open eyes.
    Focused,
    /// Baseline state, also the catch-all for ambiguous signals.
    Neutral,
    /// Elevated blink rate consistent with strain or agitation.
    Stressed,
}

impl FocusState {
    /// Stable string form matching the wire serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Focused => "focused",
            Self::Neutral => "neutral",
            Self::Stressed => "stressed",
        }
    }
}

/// Eye openness ratios derived from one frame's landmarks.
///
/// Each value is a dimensionless EAR: average vertical lid separation
/// over horizontal corner distance, roughly 0.3 for an open eye and
/// approaching 0 as the lid closes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EyeMetrics {
    /// Left eye aspect ratio.
    pub left_ear: f32,
    /// Right eye aspect ratio.
    pub right_ear: f32,
    /// Mean of the two.
    pub average_ear: f32,
}

impl EyeMetrics {
    /// Combines per-eye ratios into the averaged metric.
    #[must_use]
    pub fn from_eyes(left_ear: f32, right_ear: f32) -> Self {
        Self {
            left_ear,
            right_ear,
            average_ear: (left_ear + right_ear) / 2.0,
        }
    }
}

/// Observable result of classifying a single frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FocusReading {
    /// The attention label for this frame.
    pub focus_state: FocusState,
    /// Left eye aspect ratio.
    pub left_ear: f32,
    /// Right eye aspect ratio.
    pub right_ear: f32,
    /// Mean of the two EARs.
    pub average_ear: f32,
    /// Whether the head-pose check judged the face screen-directed.
    pub is_looking_at_screen: bool,
    /// Whether this frame completed a blink (falling-edge crossing).
    pub blink_detected: bool,
    /// Estimated blinks per minute over the recent window.
    pub blink_rate: f32,
}
