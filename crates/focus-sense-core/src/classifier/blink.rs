//! Bounded blink-sample window and rate estimation.

use std::collections::VecDeque;

/// Maximum retained samples.
const CAPACITY: usize = 60;

/// Below this many samples the estimate is too noisy to use.
const MIN_SAMPLES: usize = 5;

/// Only the most recent samples feed the rate estimate.
const RATE_WINDOW: usize = 30;

/// Extrapolates the recent-window blink count to a per-minute rate,
/// assuming the window spans roughly half a minute of sampling at the
/// caller's cadence.
const RATE_SCALE: f32 = 2.0;

/// Reported while the window is still warming up.
const DEFAULT_RATE: f32 = 15.0;

/// Sliding window of binary blink flags, one per classified frame.
///
/// Capacity is fixed at 60 samples; pushing beyond it evicts the
/// oldest entry.
#[derive(Debug, Clone, Default)]
pub struct BlinkWindow {
    samples: VecDeque<bool>,
}

impl BlinkWindow {
    /// Creates an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(CAPACITY),
        }
    }

    /// Appends one sample, evicting the oldest once full.
    pub fn push(&mut self, blinked: bool) {
        self.samples.push_back(blinked);
        while self.samples.len() > CAPACITY {
            self.samples.pop_front();
        }
    }

    /// Estimated blinks per minute.
    ///
    /// Returns the default normal rate (15/min) until enough samples
    /// accumulate; otherwise counts blinks in the most recent window
    /// and extrapolates.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rate_per_minute(&self) -> f32 {
        if self.samples.len() < MIN_SAMPLES {
            return DEFAULT_RATE;
        }
        let recent_blinks = self
            .samples
            .iter()
            .rev()
            .take(RATE_WINDOW)
            .filter(|&&b| b)
            .count();
        recent_blinks as f32 * RATE_SCALE
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Discards all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
