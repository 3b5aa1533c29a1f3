use std::sync::Arc;

use log::{error, info, warn};

use crate::config::LoaderSettings;
use crate::descriptor::{DescriptorCodec, JsonDescriptorCodec};
use crate::kernel::constants;
use crate::kernel::error::{Error, Result};
use crate::loading::{InstallDispatcher, LoadPlan, LoadPlanner, LoadReport, VersionResolver};
use crate::registry::DescriptorStore;
use crate::runtime::PluginRuntime;

/// Wires settings, the descriptor store and the plugin runtime into one
/// startup pass.
///
/// The application owns exactly one [`InstallDispatcher`], and every load
/// goes through it one directive at a time.
#[derive(Debug)]
pub struct Application {
    settings: LoaderSettings,
    planner: LoadPlanner,
    dispatcher: InstallDispatcher,
}

impl Application {
    /// Creates an application using the JSON descriptor codec.
    pub fn new(settings: LoaderSettings, store: Arc<dyn DescriptorStore>, runtime: Arc<dyn PluginRuntime>) -> Self {
        Self::with_codec(settings, store, Arc::new(JsonDescriptorCodec::new()), runtime)
    }

    pub fn with_codec(
        settings: LoaderSettings,
        store: Arc<dyn DescriptorStore>,
        codec: Arc<dyn DescriptorCodec>,
        runtime: Arc<dyn PluginRuntime>,
    ) -> Self {
        info!("Initializing {} v{}", constants::APP_NAME, constants::APP_VERSION);
        info!(
            "Descriptor store '{}' (pattern '{}'), codec '{}', {:?} version ordering",
            store.name(),
            settings.key_pattern,
            codec.format(),
            settings.version_ordering
        );

        let planner = LoadPlanner::new(store)
            .with_codec(codec)
            .with_key_pattern(settings.key_pattern.clone())
            .with_resolver(VersionResolver::new(settings.version_ordering));
        let dispatcher = InstallDispatcher::new(runtime);

        Self { settings, planner, dispatcher }
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    pub fn planner(&self) -> &LoadPlanner {
        &self.planner
    }

    pub fn dispatcher(&self) -> &InstallDispatcher {
        &self.dispatcher
    }

    /// Plan a directive without installing anything.
    pub async fn plan(&self, directive: &str) -> Result<LoadPlan> {
        Ok(self.planner.plan(directive).await?)
    }

    /// Plan and dispatch a directive.
    ///
    /// Individual install failures and unresolvable pins are reported in the
    /// returned [`LoadReport`]. Only in strict mode do they turn into an
    /// error, and only after the whole batch has been attempted.
    pub async fn load(&self, directive: &str) -> Result<LoadReport> {
        let plan = self.planner.plan(directive).await?;
        for pin in plan.unresolved() {
            warn!("{}", pin);
        }

        let dispatch = self.dispatcher.execute(&plan).await;
        let report = LoadReport { plan, dispatch, gated: false };
        info!(
            "Driver load finished: {} installed, {} already loaded, {} failed",
            report.dispatch.installed_count(),
            report.dispatch.skipped_count(),
            report.failure_count()
        );

        if self.settings.strict && !report.is_clean() {
            error!("Strict mode: {} of {} driver loads failed", report.failure_count(), report.attempted());
            return Err(Error::Strict {
                failed: report.failure_count(),
                attempted: report.attempted(),
            });
        }
        Ok(report)
    }

    /// Run the configured init-load directive, if the startup gate allows it.
    pub async fn run_init_load(&self) -> Result<LoadReport> {
        if !self.settings.init_load_gate_open() {
            info!(
                "Init-load skipped: run mode '{}' with store type '{}'",
                self.settings.run_mode, self.settings.store_type
            );
            return Ok(LoadReport::gated());
        }
        self.load(self.settings.init_load_directive()).await
    }
}
