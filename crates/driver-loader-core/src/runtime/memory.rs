use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::descriptor::DriverDescriptor;
use crate::runtime::error::{InstallError, RuntimeError};
use crate::runtime::plugin_id::PluginId;
use crate::runtime::traits::{PluginRuntime, plugin_id_for};

/// Runtime that keeps its loaded set in memory.
///
/// Installs register the id `code@version`. Codes marked with
/// [`fail_installs_for`](Self::fail_installs_for) are rejected instead.
#[derive(Debug, Default)]
pub struct InMemoryPluginRuntime {
    loaded: Mutex<Vec<PluginId>>,
    installed: Mutex<Vec<DriverDescriptor>>,
    failing_codes: HashSet<String>,
    unavailable: bool,
    list_calls: AtomicUsize,
}

impl InMemoryPluginRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the runtime with already loaded plugin ids.
    pub fn with_loaded<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PluginId>,
    {
        self.loaded.get_mut().extend(ids.into_iter().map(Into::into));
        self
    }

    /// Reject every install of a driver with exactly this code.
    pub fn fail_installs_for(mut self, driver_code: impl Into<String>) -> Self {
        self.failing_codes.insert(driver_code.into());
        self
    }

    /// Make every `list_loaded` call fail.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Descriptors successfully installed, in install order
    pub async fn installed(&self) -> Vec<DriverDescriptor> {
        self.installed.lock().await.clone()
    }

    pub async fn loaded(&self) -> Vec<PluginId> {
        self.loaded.lock().await.clone()
    }

    /// Number of `list_loaded` calls served so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PluginRuntime for InMemoryPluginRuntime {
    async fn list_loaded(&self) -> Result<Vec<PluginId>, RuntimeError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(RuntimeError::Unavailable("in-memory runtime marked unavailable".to_string()));
        }
        Ok(self.loaded.lock().await.clone())
    }

    async fn install(&self, descriptor: &DriverDescriptor) -> Result<PluginId, InstallError> {
        if self.failing_codes.contains(&descriptor.driver_code) {
            return Err(InstallError::Rejected {
                coordinates: descriptor.coordinates(),
                reason: "install refused by runtime".to_string(),
            });
        }
        let id = plugin_id_for(descriptor);
        self.loaded.lock().await.push(id.clone());
        self.installed.lock().await.push(descriptor.clone());
        Ok(id)
    }
}
