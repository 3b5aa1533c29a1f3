//! # Loader Configuration
//!
//! [`LoaderSettings`] carries everything the startup pass needs: run mode and
//! store type (which together gate the init-load pass), the init-load
//! directive itself, the registry key pattern, the version ordering and
//! strict mode. Settings come from a JSON, YAML or TOML file and can be
//! overridden from the environment.
pub mod error;
pub mod format;
pub mod settings;

pub use error::ConfigError;
pub use format::ConfigFormat;
pub use settings::{LoaderSettings, RunMode, StoreType};
