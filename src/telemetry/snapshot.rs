//! Typed telemetry rows
//!
//! One row per tracked anchor, carrying what the wire export renders. The
//! rows serialize with serde for callers that want structured output
//! instead of the fixed wire text.

use serde::{Deserialize, Serialize};

/// One exported anchor observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorSnapshot {
    /// Milliseconds since process start at sampling time
    pub timestamp_ms: u64,
    /// Anchor address
    pub address: u16,
    /// Smoothed range estimate (meters)
    pub range_m: f32,
    /// Latest signal strength (dBm)
    pub signal_dbm: f32,
    /// Caller-supplied auxiliary value, passed through unchanged
    pub aux: i32,
}
