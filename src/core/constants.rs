//! System-wide constants for the anchor registry

/// Address value reserved as "invalid / no address"; never assigned to a real anchor
pub const RESERVED_ADDRESS: u16 = 0;

/// Number of range samples retained per anchor for smoothing
pub const RANGE_WINDOW_LEN: usize = 3;

/// Default upper bound on simultaneously tracked anchors
pub const DEFAULT_MAX_ANCHORS: usize = 32;
