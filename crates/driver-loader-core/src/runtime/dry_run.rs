use async_trait::async_trait;
use log::info;
use tokio::sync::Mutex;

use crate::descriptor::DriverDescriptor;
use crate::runtime::error::{InstallError, RuntimeError};
use crate::runtime::plugin_id::PluginId;
use crate::runtime::traits::{PluginRuntime, plugin_id_for};

/// Runtime that activates nothing and records what would have been installed.
///
/// Planned installs count as loaded for later lookups, so a dry run reports
/// the same skips a real batch would.
#[derive(Debug, Default)]
pub struct DryRunRuntime {
    loaded: Vec<PluginId>,
    planned: Mutex<Vec<DriverDescriptor>>,
}

impl DryRunRuntime {
    pub fn new<I, S>(loaded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PluginId>,
    {
        Self {
            loaded: loaded.into_iter().map(Into::into).collect(),
            planned: Mutex::new(Vec::new()),
        }
    }

    /// Descriptors that would have been installed, in order
    pub async fn planned(&self) -> Vec<DriverDescriptor> {
        self.planned.lock().await.clone()
    }

    /// One "Would install ..." line per planned install
    pub async fn descriptions(&self) -> Vec<String> {
        self.planned
            .lock()
            .await
            .iter()
            .map(|d| format!("Would install {}", d))
            .collect()
    }
}

#[async_trait]
impl PluginRuntime for DryRunRuntime {
    async fn list_loaded(&self) -> Result<Vec<PluginId>, RuntimeError> {
        let planned = self.planned.lock().await;
        Ok(self.loaded.iter().cloned().chain(planned.iter().map(plugin_id_for)).collect())
    }

    async fn install(&self, descriptor: &DriverDescriptor) -> Result<PluginId, InstallError> {
        info!("[dry-run] Would install {}", descriptor);
        self.planned.lock().await.push(descriptor.clone());
        Ok(plugin_id_for(descriptor))
    }
}
