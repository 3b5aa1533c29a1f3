use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::fs;

use crate::config::error::ConfigError;
use crate::config::format::ConfigFormat;
use crate::registry::error::StoreError;
use crate::registry::memory::InMemoryDescriptorStore;
use crate::registry::store::DescriptorStore;

/// Layout of a descriptor document: key -> field -> descriptor.
type Document = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

/// Descriptor store seeded once from a JSON, YAML or TOML document.
///
/// Field values may be given either as already-serialized strings (the way
/// the registry stores them) or as inline objects, which are serialized to
/// JSON on load. The document is read once; later edits to the file are not
/// observed.
#[derive(Debug)]
pub struct FileDescriptorStore {
    path: PathBuf,
    inner: InMemoryDescriptorStore,
}

impl FileDescriptorStore {
    /// Load a descriptor document, choosing the format from the file extension.
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| StoreError::Document {
            path: path.to_path_buf(),
            source: ConfigError::UnsupportedFormat(path.to_path_buf()),
        })?;

        let data = fs::read_to_string(path).await.map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_document(path, &data, format)
    }

    /// Build a store from document text already in memory.
    pub fn from_document(path: &Path, data: &str, format: ConfigFormat) -> Result<Self, StoreError> {
        let document: Document = format.deserialize(data).map_err(|source| StoreError::Document {
            path: path.to_path_buf(),
            source,
        })?;

        let mut inner = InMemoryDescriptorStore::new();
        for (key, fields) in document {
            for (field, value) in fields {
                let bytes = match value {
                    serde_json::Value::String(raw) => raw.into_bytes(),
                    other => serde_json::to_vec(&other).map_err(|e| StoreError::Document {
                        path: path.to_path_buf(),
                        source: ConfigError::Serialize { format: "json".to_string(), message: e.to_string() },
                    })?,
                };
                inner = inner.with_field(key.clone(), field, bytes);
            }
        }

        debug!("Loaded descriptor document {}", path.display());
        Ok(Self { path: path.to_path_buf(), inner })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DescriptorStore for FileDescriptorStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn keys_matching(&self, pattern: &str) -> Result<BTreeSet<String>, StoreError> {
        self.inner.keys_matching(pattern).await
    }

    async fn read_all_fields(&self, key: &str) -> Result<BTreeMap<String, Vec<u8>>, StoreError> {
        self.inner.read_all_fields(key).await
    }
}
