use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kernel::constants::SYMBOL_AT;

/// A registered driver artifact as stored in the descriptor registry.
///
/// Field names follow the registry's camelCase wire format. Anything the
/// loader does not model explicitly is kept in `metadata` so it survives a
/// decode/encode cycle and reaches the runtime untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDescriptor {
    pub driver_id: i64,
    pub driver_code: String,
    pub driver_version: String,
    /// Download location of the driver artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_path: Option<String>,
    /// Entry class or symbol the runtime activates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_description: Option<String>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl DriverDescriptor {
    pub fn new(driver_id: i64, driver_code: impl Into<String>, driver_version: impl Into<String>) -> Self {
        Self {
            driver_id,
            driver_code: driver_code.into(),
            driver_version: driver_version.into(),
            driver_path: None,
            driver_class: None,
            driver_description: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.driver_path = Some(path.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.driver_class = Some(class.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.driver_description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Loose code match used by directive filters: `fragment` only has to
    /// appear somewhere in the driver code.
    pub fn code_contains(&self, fragment: &str) -> bool {
        self.driver_code.contains(fragment)
    }

    /// `code@version`, the form used in directives and log lines.
    pub fn coordinates(&self) -> String {
        format!("{}{}{}", self.driver_code, SYMBOL_AT, self.driver_version)
    }
}

impl fmt::Display for DriverDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.coordinates(), self.driver_id)
    }
}
