//! Typed failure reporting for registry operations

use std::fmt;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error types
///
/// Every operation reports failure through one of these values; none of the
/// registry operations panic or return placeholder records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The reserved zero address was supplied where a real anchor address is required
    InvalidAddress,
    /// A lookup was attempted while no anchors are tracked
    EmptyRegistry,
    /// No tracked anchor carries the requested address
    NotFound { address: u16 },
    /// The configured anchor bound is reached; the insert was refused
    CapacityExhausted { capacity: usize },
    /// The address is already tracked and the duplicate policy rejects re-insertion
    DuplicateAddress { address: u16 },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidAddress => {
                write!(f, "address 0x0000 is reserved and names no anchor")
            }
            RegistryError::EmptyRegistry => {
                write!(f, "no anchors are tracked")
            }
            RegistryError::NotFound { address } => {
                write!(f, "anchor {:04X} is not tracked", address)
            }
            RegistryError::CapacityExhausted { capacity } => {
                write!(f, "registry is full ({} anchors)", capacity)
            }
            RegistryError::DuplicateAddress { address } => {
                write!(f, "anchor {:04X} is already tracked", address)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
