pub mod config;
pub mod descriptor;
pub mod kernel;
pub mod loading;
pub mod registry;
pub mod runtime;
pub mod session;

// Re-export the types most callers need to wire a startup pass together.
pub use config::LoaderSettings;
pub use descriptor::{DescriptorCodec, DriverDescriptor, JsonDescriptorCodec};
pub use kernel::Application;
pub use kernel::error::{Error, Result};
pub use loading::{InstallDispatcher, LoadCriterion, LoadDirective, LoadPlan, LoadPlanner, VersionResolver};
pub use registry::DescriptorStore;
pub use runtime::{PluginId, PluginRuntime};
