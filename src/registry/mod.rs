//! Anchor record storage and CRUD operations

pub mod anchors;
pub mod error;

pub use anchors::AnchorRegistry;
pub use error::{RegistryError, RegistryResult};
