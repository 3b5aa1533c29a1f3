use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use glob::Pattern;
use tokio::sync::RwLock;

use crate::descriptor::{DescriptorCodec, DriverDescriptor, JsonDescriptorCodec};
use crate::registry::error::StoreError;
use crate::registry::store::DescriptorStore;

type FieldMap = BTreeMap<String, Vec<u8>>;

/// Descriptor store held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryDescriptorStore {
    groups: RwLock<BTreeMap<String, FieldMap>>,
}

impl InMemoryDescriptorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a raw field value.
    pub fn with_field(mut self, key: impl Into<String>, field: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.groups
            .get_mut()
            .entry(key.into())
            .or_default()
            .insert(field.into(), value.into());
        self
    }

    /// Builder-style insert of a descriptor, JSON-encoded under its driver id.
    pub fn with_descriptor(self, key: impl Into<String>, descriptor: &DriverDescriptor) -> Result<Self, StoreError> {
        let key = key.into();
        let bytes = encode_for_key(&key, descriptor)?;
        Ok(self.with_field(key, descriptor.driver_id.to_string(), bytes))
    }

    /// Store a raw field value under `key`, replacing any previous value.
    pub async fn put_field(&self, key: &str, field: &str, value: Vec<u8>) {
        let mut groups = self.groups.write().await;
        groups.entry(key.to_string()).or_default().insert(field.to_string(), value);
    }

    /// Store a descriptor JSON-encoded under its driver id.
    pub async fn put_descriptor(&self, key: &str, descriptor: &DriverDescriptor) -> Result<(), StoreError> {
        let bytes = encode_for_key(key, descriptor)?;
        self.put_field(key, &descriptor.driver_id.to_string(), bytes).await;
        Ok(())
    }

    /// Remove a whole key. Returns true if it existed.
    pub async fn remove_key(&self, key: &str) -> bool {
        self.groups.write().await.remove(key).is_some()
    }

    /// Total number of stored fields across all keys
    pub async fn field_count(&self) -> usize {
        self.groups.read().await.values().map(BTreeMap::len).sum()
    }
}

fn encode_for_key(key: &str, descriptor: &DriverDescriptor) -> Result<Vec<u8>, StoreError> {
    JsonDescriptorCodec::new()
        .encode(descriptor)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })
}

#[async_trait]
impl DescriptorStore for InMemoryDescriptorStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn keys_matching(&self, pattern: &str) -> Result<BTreeSet<String>, StoreError> {
        let matcher = Pattern::new(pattern).map_err(|source| StoreError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let groups = self.groups.read().await;
        Ok(groups.keys().filter(|key| matcher.matches(key)).cloned().collect())
    }

    async fn read_all_fields(&self, key: &str) -> Result<BTreeMap<String, Vec<u8>>, StoreError> {
        let groups = self.groups.read().await;
        Ok(groups.get(key).cloned().unwrap_or_default())
    }
}
