use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use async_trait::async_trait;

use crate::registry::error::StoreError;

/// Read access to the descriptor registry.
///
/// Both collections are ordered so that callers flattening the registry see
/// descriptors in a stable key-then-field order.
#[async_trait]
pub trait DescriptorStore: Send + Sync + Debug {
    /// Get the name of this store
    fn name(&self) -> &str;

    /// Enumerate every key matching a glob `pattern` (`*`, `?`, `[...]`)
    async fn keys_matching(&self, pattern: &str) -> Result<BTreeSet<String>, StoreError>;

    /// Read all field values under `key`. Missing keys yield an empty map.
    async fn read_all_fields(&self, key: &str) -> Result<BTreeMap<String, Vec<u8>>, StoreError>;
}
