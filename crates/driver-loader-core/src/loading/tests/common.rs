#![cfg(test)]

use std::sync::Arc;

use crate::descriptor::DriverDescriptor;
use crate::loading::LoadPlanner;
use crate::registry::InMemoryDescriptorStore;

pub fn driver(id: i64, code: &str, version: &str) -> DriverDescriptor {
    DriverDescriptor::new(id, code, version)
}

/// Store holding every descriptor under one group key.
pub fn store_with(descriptors: &[DriverDescriptor]) -> InMemoryDescriptorStore {
    descriptors
        .iter()
        .fold(InMemoryDescriptorStore::new(), |store, d| {
            store.with_descriptor("plugin-driver:0", d).expect("descriptor should encode")
        })
}

pub fn planner_over(descriptors: &[DriverDescriptor]) -> LoadPlanner {
    LoadPlanner::new(Arc::new(store_with(descriptors)))
}

/// `code@version` of every planned descriptor, in plan order
pub fn coordinates<'a>(descriptors: impl Iterator<Item = &'a DriverDescriptor>) -> Vec<String> {
    descriptors.map(DriverDescriptor::coordinates).collect()
}
