use std::fmt;

use crate::descriptor::DriverDescriptor;
use crate::loading::plan::{InstallMode, LoadPlan};
use crate::runtime::PluginId;
use crate::runtime::error::InstallError;

#[derive(Debug)]
pub enum DispatchStatus {
    /// The runtime accepted the install and reported this id
    Installed(PluginId),
    /// Skipped; the runtime already reports this id for the driver code
    AlreadyLoaded(PluginId),
    Failed(InstallError),
}

impl DispatchStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, DispatchStatus::Failed(_))
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchStatus::Installed(id) => write!(f, "installed as {}", id),
            DispatchStatus::AlreadyLoaded(id) => write!(f, "already loaded as {}", id),
            DispatchStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

#[derive(Debug)]
pub struct DispatchRecord {
    pub descriptor: DriverDescriptor,
    pub mode: InstallMode,
    pub status: DispatchStatus,
}

/// Outcome of every candidate in one dispatch batch, in dispatch order.
#[derive(Debug, Default)]
pub struct DispatchReport {
    records: Vec<DispatchRecord>,
}

impl DispatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, descriptor: DriverDescriptor, mode: InstallMode, status: DispatchStatus) {
        self.records.push(DispatchRecord { descriptor, mode, status });
    }

    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }

    pub fn installed(&self) -> impl Iterator<Item = &DispatchRecord> {
        self.records.iter().filter(|r| matches!(r.status, DispatchStatus::Installed(_)))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &DispatchRecord> {
        self.records.iter().filter(|r| matches!(r.status, DispatchStatus::AlreadyLoaded(_)))
    }

    pub fn failed(&self) -> impl Iterator<Item = &DispatchRecord> {
        self.records.iter().filter(|r| r.status.is_failure())
    }

    pub fn installed_count(&self) -> usize {
        self.installed().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Plan plus dispatch outcome for one directive evaluation.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub plan: LoadPlan,
    pub dispatch: DispatchReport,
    /// Set when the startup gate kept the pass from running at all
    pub gated: bool,
}

impl LoadReport {
    pub fn gated() -> Self {
        Self { gated: true, ..Self::default() }
    }

    /// Failed installs plus pins that never resolved
    pub fn failure_count(&self) -> usize {
        self.dispatch.failure_count() + self.plan.unresolved().len()
    }

    /// Everything that was asked for, resolved or not
    pub fn attempted(&self) -> usize {
        self.dispatch.len() + self.plan.unresolved().len()
    }

    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }
}
