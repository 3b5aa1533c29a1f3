//! # Plugin Runtime Boundary
//!
//! The runtime performs the actual activation of driver plugins; the loader
//! only asks it which plugins are loaded and tells it what to install.
//!
//! - [`PluginRuntime`]: the port the dispatcher drives.
//! - [`PluginId`]: runtime-reported identifier, matched against driver codes
//!   by substring.
//! - [`InMemoryPluginRuntime`]: records installs; can be told to fail.
//! - [`DryRunRuntime`]: reports what would be installed without doing it.
pub mod dry_run;
pub mod error;
pub mod memory;
pub mod plugin_id;
pub mod traits;

pub use dry_run::DryRunRuntime;
pub use error::{InstallError, RuntimeError};
pub use memory::InMemoryPluginRuntime;
pub use plugin_id::PluginId;
pub use traits::PluginRuntime;

#[cfg(test)]
mod tests;
