//! Measurement processing modules

pub mod smoothing;

pub use smoothing::RangeFilter;
