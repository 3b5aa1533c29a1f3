use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::descriptor::DriverDescriptor;

/// How two driver version tokens are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionOrdering {
    /// Plain string ordering: `"9"` sorts after `"10"`. Installed fleets
    /// depend on this, so it stays the default.
    #[default]
    Lexical,
    /// Semantic version ordering. Every valid semver token sorts above every
    /// token that is not; non-semver tokens compare lexically among themselves.
    Semantic,
}

impl VersionOrdering {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            VersionOrdering::Lexical => a.cmp(b),
            VersionOrdering::Semantic => match (Version::parse(a), Version::parse(b)) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                (Ok(_), Err(_)) => Ordering::Greater,
                (Err(_), Ok(_)) => Ordering::Less,
                (Err(_), Err(_)) => a.cmp(b),
            },
        }
    }
}

/// Picks the highest version of each driver code.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionResolver {
    ordering: VersionOrdering,
}

impl VersionResolver {
    pub fn new(ordering: VersionOrdering) -> Self {
        Self { ordering }
    }

    pub fn ordering(&self) -> VersionOrdering {
        self.ordering
    }

    /// Group descriptors by driver code and keep the highest version of each.
    ///
    /// A later descriptor only replaces the current best when its version is
    /// strictly greater, so among equal versions the first one seen wins. The
    /// result iterates in driver code order.
    pub fn resolve_max<I>(&self, descriptors: I) -> BTreeMap<String, DriverDescriptor>
    where
        I: IntoIterator<Item = DriverDescriptor>,
    {
        let mut best: BTreeMap<String, DriverDescriptor> = BTreeMap::new();
        for descriptor in descriptors {
            match best.entry(descriptor.driver_code.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
                Entry::Occupied(mut slot) => {
                    let current = &slot.get().driver_version;
                    if self.ordering.compare(&descriptor.driver_version, current) == Ordering::Greater {
                        slot.insert(descriptor);
                    }
                }
            }
        }
        best
    }
}
