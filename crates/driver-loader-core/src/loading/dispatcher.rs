use std::sync::Arc;

use log::{debug, info, warn};

use crate::descriptor::DriverDescriptor;
use crate::loading::plan::{InstallMode, LoadPlan};
use crate::loading::report::{DispatchReport, DispatchStatus};
use crate::runtime::PluginRuntime;

/// Issues install requests to the plugin runtime.
///
/// Candidates are handled strictly one after another. The loaded-plugin
/// lookup is repeated before every guarded candidate so installs made
/// earlier in the same batch are seen. Concurrent dispatches against one
/// runtime would race between that lookup and the install, so callers must
/// funnel all dispatching through a single dispatcher.
#[derive(Debug, Clone)]
pub struct InstallDispatcher {
    runtime: Arc<dyn PluginRuntime>,
}

impl InstallDispatcher {
    pub fn new(runtime: Arc<dyn PluginRuntime>) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &Arc<dyn PluginRuntime> {
        &self.runtime
    }

    /// Dispatch guarded candidates: anything the runtime already has loaded is
    /// skipped, everything else is installed. Failures never stop the batch.
    pub async fn dispatch<'a, I>(&self, candidates: I) -> DispatchReport
    where
        I: IntoIterator<Item = &'a DriverDescriptor>,
    {
        let mut report = DispatchReport::new();
        for descriptor in candidates {
            let status = self.install_guarded(descriptor).await;
            report.record(descriptor.clone(), InstallMode::Guarded, status);
        }
        report
    }

    /// Execute a plan in order, honouring each entry's install mode.
    pub async fn execute(&self, plan: &LoadPlan) -> DispatchReport {
        let mut report = DispatchReport::new();
        for entry in plan.entries() {
            let status = match entry.mode {
                InstallMode::Guarded => self.install_guarded(&entry.descriptor).await,
                InstallMode::Pinned => self.install_pinned(&entry.descriptor).await,
            };
            report.record(entry.descriptor.clone(), entry.mode, status);
        }
        report
    }

    /// Install without consulting the loaded-plugin list.
    pub async fn install_pinned(&self, descriptor: &DriverDescriptor) -> DispatchStatus {
        info!("Installing pinned driver {}", descriptor);
        self.install(descriptor).await
    }

    async fn install_guarded(&self, descriptor: &DriverDescriptor) -> DispatchStatus {
        let loaded = match self.runtime.list_loaded().await {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("Could not list loaded plugins before installing {}: {}", descriptor, e);
                return DispatchStatus::Failed(e.into());
            }
        };

        if let Some(id) = loaded.into_iter().find(|id| id.contains_code(&descriptor.driver_code)) {
            debug!("plugin[{}] is already loaded as {}, skip...", descriptor.driver_code, id);
            return DispatchStatus::AlreadyLoaded(id);
        }

        info!("Installing driver {}", descriptor);
        self.install(descriptor).await
    }

    async fn install(&self, descriptor: &DriverDescriptor) -> DispatchStatus {
        match self.runtime.install(descriptor).await {
            Ok(id) => DispatchStatus::Installed(id),
            Err(e) => {
                warn!("Failed to install driver {}: {}", descriptor, e);
                DispatchStatus::Failed(e)
            }
        }
    }
}
