use std::fmt::Debug;

use async_trait::async_trait;

use crate::descriptor::DriverDescriptor;
use crate::runtime::error::{InstallError, RuntimeError};
use crate::runtime::plugin_id::PluginId;

/// The plugin runtime as seen by the loader.
#[async_trait]
pub trait PluginRuntime: Send + Sync + Debug {
    /// Identifiers of every currently loaded plugin
    async fn list_loaded(&self) -> Result<Vec<PluginId>, RuntimeError>;

    /// Activate the driver described by `descriptor` and return its id.
    async fn install(&self, descriptor: &DriverDescriptor) -> Result<PluginId, InstallError>;
}

/// Id under which in-process runtimes register an installed driver.
pub(crate) fn plugin_id_for(descriptor: &DriverDescriptor) -> PluginId {
    PluginId::new(descriptor.coordinates())
}
