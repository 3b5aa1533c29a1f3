use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the runtime reports for an active plugin.
///
/// Runtime ids embed the driver code among other things, so identity checks
/// against a driver code are containment checks, not equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginId(String);

impl PluginId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `driver_code` appears anywhere in this id.
    pub fn contains_code(&self, driver_code: &str) -> bool {
        self.0.contains(driver_code)
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PluginId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PluginId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
