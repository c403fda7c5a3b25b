//! UWB Anchor Ranging Registry
//!
//! An in-memory registry of UWB ranging anchors identified by 16-bit
//! addresses. Each tracked anchor carries a rolling-mean smoothed distance
//! estimate and its latest signal strength, and the whole registry renders
//! as a fixed-format JSON array for telemetry reporting.

pub mod core;
pub mod registry;
pub mod processing;
pub mod telemetry;
pub mod hardware;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{AnchorRecord, DEFAULT_MAX_ANCHORS, RANGE_WINDOW_LEN, RESERVED_ADDRESS};
pub use crate::hardware::{MockClock, MonotonicClock, SystemClock};
pub use crate::processing::RangeFilter;
pub use crate::registry::{AnchorRegistry, RegistryError, RegistryResult};
pub use crate::telemetry::{AnchorSnapshot, TelemetryExporter};
pub use crate::utils::{ConfigError, DuplicatePolicy, RegistryConfig};
