//! Range smoothing over a short rolling window
//!
//! UWB range readings jitter by tens of centimeters between solicitations,
//! so each anchor keeps a three-sample rolling mean rather than the raw
//! reading. The window is ordered most-recent first.

use crate::core::RANGE_WINDOW_LEN;
use serde::{Deserialize, Serialize};

/// Three-tap rolling-mean filter for range samples
///
/// Each new sample shifts the window back one slot and stores the mean of
/// the sample and the two retained values in slot zero. Slot zero is
/// therefore always the current smoothed estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    /// Smoothed samples, most-recent first
    window: [f32; RANGE_WINDOW_LEN],
}

impl Default for RangeFilter {
    fn default() -> Self {
        Self {
            window: [0.0; RANGE_WINDOW_LEN],
        }
    }
}

impl RangeFilter {
    /// Create a filter with a zeroed window
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one range sample through the filter
    ///
    /// Shifts the window back one slot, then stores the mean of the new
    /// sample and the two retained values. Returns the new smoothed
    /// estimate.
    pub fn apply(&mut self, sample: f32) -> f32 {
        self.window[2] = self.window[1];
        self.window[1] = self.window[0];
        self.window[0] = (sample + self.window[1] + self.window[2]) / 3.0;
        self.window[0]
    }

    /// Current smoothed range estimate (meters)
    pub fn current(&self) -> f32 {
        self.window[0]
    }

    /// Full sample window, most-recent first
    pub fn window(&self) -> &[f32; RANGE_WINDOW_LEN] {
        &self.window
    }

    /// Clear the window back to its initial zeroed state
    pub fn reset(&mut self) {
        self.window = [0.0; RANGE_WINDOW_LEN];
    }
}
