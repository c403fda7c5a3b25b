//! Insertion-ordered registry of tracked anchors
//!
//! The registry owns one record per known anchor and keeps them in the
//! order they were first inserted. Lookups are linear scans; the tracked
//! population is expected to stay at tens of anchors, so no index is kept.

use crate::core::{AnchorRecord, RESERVED_ADDRESS};
use crate::registry::error::{RegistryError, RegistryResult};
use crate::utils::{DuplicatePolicy, RegistryConfig};
use log::{debug, warn};

/// In-memory collection of all currently tracked anchors
///
/// All operations run to completion synchronously; the registry is
/// single-threaded and callers in concurrent environments must serialize
/// access around every operation.
#[derive(Debug, Clone)]
pub struct AnchorRegistry {
    /// Tracked records in insertion order
    records: Vec<AnchorRecord>,
    /// Capacity bound and duplicate policy
    config: RegistryConfig,
}

impl Default for AnchorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorRegistry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            records: Vec::with_capacity(config.max_anchors),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Start tracking an anchor under the given address
    ///
    /// The new record starts with a zeroed range window and zero signal
    /// strength. An address that is already tracked is handled per the
    /// configured [`DuplicatePolicy`]; a full registry refuses the insert
    /// without touching existing records.
    pub fn insert(&mut self, address: u16) -> RegistryResult<()> {
        if address == RESERVED_ADDRESS {
            warn!("insert: address 0x0000 is reserved");
            return Err(RegistryError::InvalidAddress);
        }

        if let Some(existing) = self.records.iter_mut().find(|r| r.address == address) {
            return match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    warn!("insert: anchor {:04X} is already tracked", address);
                    Err(RegistryError::DuplicateAddress { address })
                }
                DuplicatePolicy::Replace => {
                    *existing = AnchorRecord::new(address);
                    debug!("insert: anchor {:04X} re-initialized in place", address);
                    Ok(())
                }
            };
        }

        if self.records.len() >= self.config.max_anchors {
            warn!(
                "insert: registry is full, {} anchors tracked",
                self.records.len()
            );
            return Err(RegistryError::CapacityExhausted {
                capacity: self.config.max_anchors,
            });
        }

        self.records.push(AnchorRecord::new(address));
        debug!("insert: now tracking anchor {:04X}", address);
        Ok(())
    }

    /// Look up the record tracked under the given address
    pub fn find(&self, address: u16) -> RegistryResult<&AnchorRecord> {
        let index = self.locate(address)?;
        Ok(&self.records[index])
    }

    /// Apply a new ranging result to the anchor at the given address
    ///
    /// The range sample passes through the record's smoothing filter and
    /// the signal strength is overwritten. On a failed lookup no record is
    /// mutated and the lookup error is returned; callers that want the
    /// fire-and-forget behavior of the original firmware can discard it.
    pub fn update(&mut self, address: u16, range_m: f32, signal_dbm: f32) -> RegistryResult<()> {
        let index = self.locate(address)?;
        self.records[index].apply_measurement(range_m, signal_dbm);
        debug!(
            "update: anchor {:04X} smoothed range {:.2} m at {:.2} dBm",
            address,
            self.records[index].smoothed_range(),
            signal_dbm
        );
        Ok(())
    }

    /// Stop tracking the anchor at the given address
    ///
    /// Removes at most one record and preserves the order of the
    /// survivors. Returns whether a record was removed; a zero or unknown
    /// address is a no-op, not an error.
    pub fn remove(&mut self, address: u16) -> bool {
        if address == RESERVED_ADDRESS {
            return false;
        }

        match self.records.iter().position(|r| r.address == address) {
            Some(index) => {
                self.records.remove(index);
                debug!("remove: anchor {:04X} dropped", address);
                true
            }
            None => false,
        }
    }

    /// Number of tracked anchors
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any anchors are tracked
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over tracked records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &AnchorRecord> {
        self.records.iter()
    }

    /// Tracked records in insertion order
    pub fn records(&self) -> &[AnchorRecord] {
        &self.records
    }

    /// Shared lookup contract for `find` and `update`
    fn locate(&self, address: u16) -> RegistryResult<usize> {
        if address == RESERVED_ADDRESS {
            warn!("lookup: address 0x0000 is reserved");
            return Err(RegistryError::InvalidAddress);
        }

        if self.records.is_empty() {
            warn!("lookup: no anchors tracked");
            return Err(RegistryError::EmptyRegistry);
        }

        match self.records.iter().position(|r| r.address == address) {
            Some(index) => Ok(index),
            None => {
                warn!("lookup: anchor {:04X} is not tracked", address);
                Err(RegistryError::NotFound { address })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(addresses: &[u16]) -> AnchorRegistry {
        let mut registry = AnchorRegistry::new();
        for &address in addresses {
            registry.insert(address).unwrap();
        }
        registry
    }

    #[test]
    fn test_insert_then_find() {
        let registry = registry_with(&[0x001A, 0x002B, 0x003C]);

        let record = registry.find(0x002B).unwrap();
        assert_eq!(record.address, 0x002B);
    }

    #[test]
    fn test_fresh_record_starts_zeroed() {
        let registry = registry_with(&[0x001A]);

        let record = registry.find(0x001A).unwrap();
        assert_eq!(record.range_filter.window(), &[0.0, 0.0, 0.0]);
        assert_eq!(record.signal_dbm, 0.0);
    }

    #[test]
    fn test_find_zero_address_always_invalid() {
        // Regardless of registry contents
        let empty = AnchorRegistry::new();
        assert_eq!(empty.find(0), Err(RegistryError::InvalidAddress));

        let populated = registry_with(&[0x001A]);
        assert_eq!(populated.find(0), Err(RegistryError::InvalidAddress));
    }

    #[test]
    fn test_find_on_empty_registry() {
        let registry = AnchorRegistry::new();
        assert_eq!(registry.find(0x001A), Err(RegistryError::EmptyRegistry));
    }

    #[test]
    fn test_find_unknown_address() {
        let registry = registry_with(&[0x001A]);
        assert_eq!(
            registry.find(0x00FF),
            Err(RegistryError::NotFound { address: 0x00FF })
        );
    }

    #[test]
    fn test_insert_zero_address_is_rejected() {
        let mut registry = AnchorRegistry::new();
        assert_eq!(registry.insert(0), Err(RegistryError::InvalidAddress));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_applies_shift_then_average() {
        let mut registry = registry_with(&[0x001A]);

        registry.update(0x001A, 3.0, -70.0).unwrap();
        registry.update(0x001A, 4.0, -71.0).unwrap();
        registry.update(0x001A, 5.0, -72.0).unwrap();

        let record = registry.find(0x001A).unwrap();
        let w = record.range_filter.window();
        assert!((w[0] - (5.0 + 5.0 / 3.0 + 1.0) / 3.0).abs() < 1e-6);
        assert!((w[1] - 5.0 / 3.0).abs() < 1e-6);
        assert!((w[2] - 1.0).abs() < 1e-6);

        // Signal strength is the latest reading, not an average
        assert_eq!(record.signal_dbm, -72.0);
    }

    #[test]
    fn test_update_unknown_address_mutates_nothing() {
        let mut registry = registry_with(&[0x001A]);
        registry.update(0x001A, 9.0, -60.0).unwrap();

        let before = registry.find(0x001A).unwrap().clone();
        assert_eq!(
            registry.update(0x00FF, 1.0, -50.0),
            Err(RegistryError::NotFound { address: 0x00FF })
        );

        // The tracked record is untouched by the failed update
        assert_eq!(registry.find(0x001A).unwrap(), &before);
    }

    #[test]
    fn test_update_lookup_contract_matches_find() {
        let mut empty = AnchorRegistry::new();
        assert_eq!(
            empty.update(0x001A, 1.0, -50.0),
            Err(RegistryError::EmptyRegistry)
        );
        assert_eq!(
            empty.update(0, 1.0, -50.0),
            Err(RegistryError::InvalidAddress)
        );
    }

    #[test]
    fn test_remove_drops_exactly_one_record() {
        let mut registry = registry_with(&[0x001A, 0x002B, 0x003C]);

        assert!(registry.remove(0x002B));
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.find(0x002B),
            Err(RegistryError::NotFound { address: 0x002B })
        );

        // Survivors keep their relative order
        let addresses: Vec<u16> = registry.iter().map(|r| r.address).collect();
        assert_eq!(addresses, vec![0x001A, 0x003C]);
    }

    #[test]
    fn test_remove_unknown_or_zero_is_noop() {
        let mut registry = registry_with(&[0x001A, 0x002B]);

        assert!(!registry.remove(0x00FF));
        assert!(!registry.remove(0));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_rejected_by_default() {
        let mut registry = registry_with(&[0x001A]);
        registry.update(0x001A, 3.0, -70.0).unwrap();

        assert_eq!(
            registry.insert(0x001A),
            Err(RegistryError::DuplicateAddress { address: 0x001A })
        );

        // The existing record's history survives the refused insert
        let record = registry.find(0x001A).unwrap();
        assert!((record.smoothed_range() - 1.0).abs() < 1e-6);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_replace_policy() {
        let config = RegistryConfig::new().with_duplicate_policy(DuplicatePolicy::Replace);
        let mut registry = AnchorRegistry::with_config(config);

        registry.insert(0x001A).unwrap();
        registry.insert(0x002B).unwrap();
        registry.update(0x001A, 3.0, -70.0).unwrap();

        registry.insert(0x001A).unwrap();

        // Re-initialized in place: zeroed history, same slot, no growth
        let record = registry.find(0x001A).unwrap();
        assert_eq!(record.range_filter.window(), &[0.0, 0.0, 0.0]);
        assert_eq!(record.signal_dbm, 0.0);
        let addresses: Vec<u16> = registry.iter().map(|r| r.address).collect();
        assert_eq!(addresses, vec![0x001A, 0x002B]);
    }

    #[test]
    fn test_insert_at_capacity_fails_distinctly() {
        let config = RegistryConfig::new().with_max_anchors(2);
        let mut registry = AnchorRegistry::with_config(config);

        registry.insert(0x0001).unwrap();
        registry.insert(0x0002).unwrap();

        assert_eq!(
            registry.insert(0x0003),
            Err(RegistryError::CapacityExhausted { capacity: 2 })
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_replace_succeeds_on_full_registry() {
        let config = RegistryConfig::new()
            .with_max_anchors(2)
            .with_duplicate_policy(DuplicatePolicy::Replace);
        let mut registry = AnchorRegistry::with_config(config);

        registry.insert(0x0001).unwrap();
        registry.insert(0x0002).unwrap();

        // Replacement does not grow the registry, so capacity is no obstacle
        assert!(registry.insert(0x0002).is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookups_and_updates_never_reorder() {
        let mut registry = registry_with(&[0x000A, 0x000B, 0x000C, 0x000D]);

        registry.update(0x000C, 4.2, -66.0).unwrap();
        registry.find(0x000D).unwrap();
        registry.update(0x000A, 1.1, -80.0).unwrap();

        let addresses: Vec<u16> = registry.iter().map(|r| r.address).collect();
        assert_eq!(addresses, vec![0x000A, 0x000B, 0x000C, 0x000D]);
    }

    #[test]
    fn test_find_is_idempotent() {
        let registry = registry_with(&[0x001A]);

        let first = registry.find(0x001A).unwrap().clone();
        let second = registry.find(0x001A).unwrap().clone();
        assert_eq!(first, second);
    }
}
