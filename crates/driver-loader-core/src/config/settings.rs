use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::config::error::ConfigError;
use crate::config::format::ConfigFormat;
use crate::kernel::constants;
use crate::loading::version::VersionOrdering;

/// Deployment mode the service runs in. Only `Prod` and `Deployment` open the
/// init-load gate; any unrecognised mode is kept verbatim and keeps it closed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunMode {
    #[default]
    Dev,
    Test,
    Prod,
    Deployment,
    Other(String),
}

impl RunMode {
    pub fn as_str(&self) -> &str {
        match self {
            RunMode::Dev => "dev",
            RunMode::Test => "test",
            RunMode::Prod => "prod",
            RunMode::Deployment => "deployment",
            RunMode::Other(mode) => mode,
        }
    }

    /// Production-like modes in which startup work is allowed to run
    pub fn is_production(&self) -> bool {
        matches!(self, RunMode::Prod | RunMode::Deployment)
    }
}

impl From<&str> for RunMode {
    fn from(value: &str) -> Self {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "dev" => RunMode::Dev,
            "test" => RunMode::Test,
            "prod" => RunMode::Prod,
            "deployment" => RunMode::Deployment,
            _ => RunMode::Other(value.to_string()),
        }
    }
}

impl From<String> for RunMode {
    fn from(value: String) -> Self {
        RunMode::from(value.as_str())
    }
}

impl FromStr for RunMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RunMode::from(s))
    }
}

impl From<RunMode> for String {
    fn from(mode: RunMode) -> Self {
        match mode {
            RunMode::Other(mode) => mode,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where driver artifacts are stored. Init-load only applies to object storage;
/// unrecognised store types are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StoreType {
    #[default]
    Local,
    Minio,
    Other(String),
}

impl StoreType {
    pub fn as_str(&self) -> &str {
        match self {
            StoreType::Local => "local",
            StoreType::Minio => "minio",
            StoreType::Other(store_type) => store_type,
        }
    }
}

impl From<&str> for StoreType {
    fn from(value: &str) -> Self {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "local" => StoreType::Local,
            "minio" => StoreType::Minio,
            _ => StoreType::Other(value.to_string()),
        }
    }
}

impl From<String> for StoreType {
    fn from(value: String) -> Self {
        StoreType::from(value.as_str())
    }
}

impl FromStr for StoreType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StoreType::from(s))
    }
}

impl From<StoreType> for String {
    fn from(store_type: StoreType) -> Self {
        match store_type {
            StoreType::Other(store_type) => store_type,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for the driver loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    pub run_mode: RunMode,
    pub store_type: StoreType,
    /// Directive evaluated by the startup pass, e.g. `*` or `mysql,hive@2.3.7`
    pub init_load: Option<String>,
    /// Glob pattern for descriptor keys in the registry
    pub key_pattern: String,
    pub version_ordering: VersionOrdering,
    /// Fail the startup pass when any driver could not be loaded
    pub strict: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            run_mode: RunMode::default(),
            store_type: StoreType::default(),
            init_load: None,
            key_pattern: constants::DEFAULT_KEY_PATTERN.to_string(),
            version_ordering: VersionOrdering::default(),
            strict: false,
        }
    }
}

impl LoaderSettings {
    /// Load settings from a file, choosing the format from its extension.
    pub async fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let data = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&data, format)
    }

    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        format.deserialize(data)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(constants::ENV_RUN_MODE) {
            self.run_mode = RunMode::from(value);
        }
        if let Some(value) = lookup(constants::ENV_STORE_TYPE) {
            self.store_type = StoreType::from(value);
        }
        if let Some(value) = lookup(constants::ENV_INIT_LOAD) {
            self.init_load = Some(value);
        }
        if let Some(value) = lookup(constants::ENV_STRICT) {
            self.strict = parse_flag(constants::ENV_STRICT, &value)?;
        }
        Ok(())
    }

    /// The init-load pass only runs in production-like modes backed by
    /// object storage.
    pub fn init_load_gate_open(&self) -> bool {
        self.run_mode.is_production() && self.store_type == StoreType::Minio
    }

    /// The configured directive, or an empty one when unset.
    pub fn init_load_directive(&self) -> &str {
        self.init_load.as_deref().unwrap_or("")
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key: key.to_string(), value: value.to_string() }),
    }
}
