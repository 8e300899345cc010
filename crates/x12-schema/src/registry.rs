//! Descriptor registry
//!
//! Process-wide registry keyed by (format, version, set id). Descriptors
//! are validated on registration and handed out as shared references;
//! after registration completes the registry is read-only on the
//! decode/encode hot path and safe for unsynchronized concurrent lookups.

use crate::descriptor::TransactionSetDescriptor;
use crate::{Error, Result};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, trace};
use x12_ir::DocumentKey;

/// Registry of transaction-set descriptors.
pub struct DescriptorRegistry {
    sets: DashMap<DocumentKey, Arc<TransactionSetDescriptor>>,
}

impl DescriptorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sets: DashMap::new(),
        }
    }

    /// Validate and register a descriptor. Fails fast on authoring errors
    /// and on duplicate registration.
    pub fn register(&self, descriptor: TransactionSetDescriptor) -> Result<()> {
        descriptor.validate()?;
        let key = descriptor.key();
        if self.sets.contains_key(&key) {
            return Err(Error::DuplicateDescriptor {
                key: key.to_string(),
            });
        }
        debug!("registered descriptor for {}", key);
        self.sets.insert(key, Arc::new(descriptor));
        Ok(())
    }

    /// Look up the descriptor for a document identity.
    pub fn describe(&self, key: &DocumentKey) -> Result<Arc<TransactionSetDescriptor>> {
        match self.sets.get(key) {
            Some(entry) => {
                trace!("descriptor lookup hit for {}", key);
                Ok(Arc::clone(entry.value()))
            }
            None => Err(Error::NotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Whether a descriptor is registered for the identity.
    pub fn contains(&self, key: &DocumentKey) -> bool {
        self.sets.contains_key(key)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl Default for DescriptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ElementDescriptor, MemberDescriptor, SegmentDescriptor};
    use crate::kind::ElementKind;
    use x12_ir::{EdiFormat, Version};

    fn sample_descriptor() -> TransactionSetDescriptor {
        let segment = SegmentDescriptor::new(
            "XX",
            "Test",
            vec![ElementDescriptor::mandatory(
                1,
                "Only",
                ElementKind::Alphanumeric,
                1,
                10,
            )],
        );
        TransactionSetDescriptor::new(
            EdiFormat::X12,
            Version::V4010,
            "999",
            "Test",
            vec![MemberDescriptor::mandatory_segment(100, segment)],
        )
    }

    #[test]
    fn test_register_and_describe() {
        let registry = DescriptorRegistry::new();
        registry.register(sample_descriptor()).unwrap();

        let key = DocumentKey::x12(Version::V4010, "999");
        assert!(registry.contains(&key));
        let descriptor = registry.describe(&key).unwrap();
        assert_eq!(descriptor.set_id, "999");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let registry = DescriptorRegistry::new();
        registry.register(sample_descriptor()).unwrap();
        assert!(matches!(
            registry.register(sample_descriptor()),
            Err(Error::DuplicateDescriptor { .. })
        ));
    }

    #[test]
    fn test_missing_descriptor() {
        let registry = DescriptorRegistry::new();
        let key = DocumentKey::x12(Version::V8010, "850");
        assert!(matches!(
            registry.describe(&key),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_descriptor_not_registered() {
        let registry = DescriptorRegistry::new();
        let segment = SegmentDescriptor::new("XX", "Broken", vec![]);
        let ts = TransactionSetDescriptor::new(
            EdiFormat::X12,
            Version::V4010,
            "999",
            "Broken",
            vec![
                MemberDescriptor::mandatory_segment(100, segment.clone()),
                MemberDescriptor::optional_segment(50, segment),
            ],
        );
        assert!(registry.register(ts).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_lookup() {
        let registry = Arc::new(DescriptorRegistry::new());
        registry.register(sample_descriptor()).unwrap();

        let key = DocumentKey::x12(Version::V4010, "999");
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let key = key.clone();
                std::thread::spawn(move || registry.describe(&key).is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
