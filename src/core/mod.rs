//! Core types and constants for the anchor registry

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
