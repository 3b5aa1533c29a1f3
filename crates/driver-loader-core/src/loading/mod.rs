//! # Driver Loading
//!
//! Decides which driver artifacts become active for a load directive.
//!
//! - **[`directive`]**: parses `*`, `code` and `code@version` tokens into
//!   [`LoadCriterion`] values.
//! - **[`version`]**: [`VersionResolver`] collapses every driver code to its
//!   highest version.
//! - **[`planner`]**: [`LoadPlanner`] reads the registry, decodes descriptors
//!   and turns a directive into an ordered [`LoadPlan`].
//! - **[`dispatcher`]**: [`InstallDispatcher`] skips drivers the runtime
//!   already has loaded and installs the rest, one at a time.
//! - **[`report`]**: per-candidate outcomes of a dispatch.
pub mod directive;
pub mod dispatcher;
pub mod error;
pub mod plan;
pub mod planner;
pub mod report;
pub mod version;

pub use directive::{LoadCriterion, LoadDirective};
pub use dispatcher::InstallDispatcher;
pub use error::LoadError;
pub use plan::{InstallMode, LoadPlan, PlanEntry, UnresolvedPin};
pub use planner::LoadPlanner;
pub use report::{DispatchRecord, DispatchReport, DispatchStatus, LoadReport};
pub use version::{VersionOrdering, VersionResolver};

#[cfg(test)]
mod tests;
