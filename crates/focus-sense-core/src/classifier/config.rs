//! Classifier threshold configuration.

/// Tunable thresholds for the focus classifier.
///
/// The defaults are empirical values carried over from field use, not
/// derived from a calibration procedure. They assume the upstream
/// sampler polls at roughly two frames per second; the blink-rate
/// extrapolation in [`super::BlinkWindow`] bakes in the same cadence.
/// Treat them as a starting point, not ground truth.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierConfig {
    /// Averaged EAR at or below which a falling edge counts as a blink.
    pub blink_ear_threshold: f32,

    /// Averaged EAR below which the eyes are too closed to call the
    /// subject attentive (drowsy band).
    pub drowsy_ear_threshold: f32,

    /// Minimum averaged EAR for the low-blink-rate focused rule.
    pub focused_ear_floor: f32,

    /// Minimum averaged EAR for the mid-blink-rate focused rule.
    pub steady_ear_floor: f32,

    /// Blinks per minute below which the rate counts as low.
    pub low_blink_rate: f32,

    /// Upper bound of the mid blink-rate band (per minute).
    pub steady_blink_rate: f32,

    /// Blinks per minute above which the subject reads as stressed.
    pub high_blink_rate: f32,

    /// Maximum `|dz| / |dy|` of the nose bridge-to-tip vector before
    /// the face counts as turned away from the screen.
    pub gaze_depth_ratio: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            blink_ear_threshold: 0.21,
            drowsy_ear_threshold: 0.18,
            focused_ear_floor: 0.22,
            steady_ear_floor: 0.20,
            low_blink_rate: 12.0,
            steady_blink_rate: 20.0,
            high_blink_rate: 25.0,
            gaze_depth_ratio: 0.5,
        }
    }
}

impl ClassifierConfig {
    /// Sets the blink EAR threshold.
    #[must_use]
    pub const fn with_blink_threshold(mut self, threshold: f32) -> Self {
        self.blink_ear_threshold = threshold;
        self
    }

    /// Sets the drowsy EAR floor.
    #[must_use]
    pub const fn with_drowsy_threshold(mut self, threshold: f32) -> Self {
        self.drowsy_ear_threshold = threshold;
        self
    }

    /// Sets the gaze depth ratio.
    #[must_use]
    pub const fn with_gaze_ratio(mut self, ratio: f32) -> Self {
        self.gaze_depth_ratio = ratio;
        self
    }
}
