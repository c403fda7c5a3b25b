//! Core data types for the anchor registry

use crate::processing::RangeFilter;
use serde::{Deserialize, Serialize};

/// Measurement state for a single UWB anchor
///
/// One record exists per tracked anchor. The range history is smoothed by a
/// rolling-mean filter; the signal strength always reflects the most recent
/// reading only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorRecord {
    /// 16-bit anchor address; zero is reserved and never appears here
    pub address: u16,
    /// Rolling-mean filter over the most recent range samples
    pub range_filter: RangeFilter,
    /// Latest reported signal strength (dBm), not smoothed
    pub signal_dbm: f32,
}

impl AnchorRecord {
    /// Create a fresh record with a zeroed measurement history
    pub fn new(address: u16) -> Self {
        Self {
            address,
            range_filter: RangeFilter::new(),
            signal_dbm: 0.0,
        }
    }

    /// Current smoothed range estimate (meters)
    pub fn smoothed_range(&self) -> f32 {
        self.range_filter.current()
    }

    /// Apply one ranging result to this record
    ///
    /// The range sample passes through the smoothing filter; the signal
    /// strength is overwritten with the new reading.
    pub fn apply_measurement(&mut self, range_m: f32, signal_dbm: f32) {
        self.range_filter.apply(range_m);
        self.signal_dbm = signal_dbm;
    }
}
