//! # Descriptor Registry
//!
//! The registry is a grouped key-value namespace: each key holds a hash of
//! fields, and every field value is one serialized driver descriptor. The
//! loader only ever enumerates keys matching a glob pattern and reads all
//! fields of a key, which is exactly what [`DescriptorStore`] exposes.
//!
//! - [`memory`]: [`InMemoryDescriptorStore`], the default store and test fake.
//! - [`file`]: [`FileDescriptorStore`], a store seeded from a JSON, YAML or
//!   TOML document.
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use file::FileDescriptorStore;
pub use memory::InMemoryDescriptorStore;
pub use store::DescriptorStore;
