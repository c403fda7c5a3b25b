//! Telemetry snapshot export
//!
//! Renders the registry as a JSON array in a fixed wire format consumed by
//! the reporting side:
//!
//! ```text
//! [{"T":<millis>,"A":"<4 hex digits>","R":<range>,"Rx":<dBm>,"C":<aux>}, ...]
//! ```
//!
//! The field order, uppercase four-digit hex address, and two-decimal
//! rendering of `R` and `Rx` are part of the contract, which is why the
//! array is built with the formatting machinery instead of serde_json.

use crate::hardware::{MonotonicClock, SystemClock};
use crate::registry::AnchorRegistry;
use crate::telemetry::snapshot::AnchorSnapshot;

/// Renders registry snapshots for telemetry reporting
///
/// Owns the clock that stamps exported rows. The clock is queried once per
/// record, so timestamps within one export are approximately constant per
/// call rather than guaranteed identical.
pub struct TelemetryExporter<C: MonotonicClock = SystemClock> {
    clock: C,
}

impl TelemetryExporter<SystemClock> {
    /// Create an exporter stamped by a real clock starting now
    pub fn new() -> Self {
        Self {
            clock: SystemClock::new(),
        }
    }
}

impl Default for TelemetryExporter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MonotonicClock> TelemetryExporter<C> {
    /// Create an exporter stamped by the given clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Capture one typed row per tracked anchor, in insertion order
    pub fn snapshot(&self, registry: &AnchorRegistry, aux: i32) -> Vec<AnchorSnapshot> {
        registry
            .iter()
            .map(|record| AnchorSnapshot {
                timestamp_ms: self.clock.now_ms(),
                address: record.address,
                range_m: record.smoothed_range(),
                signal_dbm: record.signal_dbm,
                aux,
            })
            .collect()
    }

    /// Render the registry as the wire-format JSON array
    ///
    /// An empty registry yields exactly `[]`. No trailing newline is
    /// appended.
    pub fn export_json(&self, registry: &AnchorRegistry, aux: i32) -> String {
        let mut out = String::from("[");
        let mut first = true;

        for row in self.snapshot(registry, aux) {
            if !first {
                out.push(',');
            }
            first = false;
            out.push_str(&format_wire_object(&row));
        }

        out.push(']');
        out
    }
}

/// Render one snapshot row as a wire-format JSON object
fn format_wire_object(row: &AnchorSnapshot) -> String {
    format!(
        "{{\"T\":{},\"A\":\"{:04X}\",\"R\":{:.2},\"Rx\":{:.2},\"C\":{}}}",
        row.timestamp_ms, row.address, row.range_m, row.signal_dbm, row.aux
    )
}
