use std::fmt;

use crate::descriptor::DriverDescriptor;
use crate::kernel::constants::SYMBOL_AT;
use crate::loading::directive::LoadCriterion;
use crate::loading::error::LoadError;

/// How the dispatcher treats a planned descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// Skipped when the runtime already reports a matching plugin
    Guarded,
    /// Installed unconditionally
    Pinned,
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMode::Guarded => f.write_str("guarded"),
            InstallMode::Pinned => f.write_str("pinned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub descriptor: DriverDescriptor,
    pub mode: InstallMode,
    /// The directive criterion that selected this descriptor
    pub criterion: LoadCriterion,
}

/// A `code@version` pin with no matching descriptor in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPin {
    pub code: String,
    pub version: String,
}

impl UnresolvedPin {
    pub fn to_error(&self) -> LoadError {
        LoadError::UnresolvablePin {
            code: self.code.clone(),
            version: self.version.clone(),
        }
    }
}

impl fmt::Display for UnresolvedPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unresolvable pin: {}{}{}", self.code, SYMBOL_AT, self.version)
    }
}

/// Ordered descriptors selected for a directive.
///
/// No deduplication happens across criteria: a code selected by `*` and
/// pinned explicitly appears twice, once per mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadPlan {
    entries: Vec<PlanEntry>,
    unresolved: Vec<UnresolvedPin>,
}

impl LoadPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: DriverDescriptor, mode: InstallMode, criterion: LoadCriterion) {
        self.entries.push(PlanEntry { descriptor, mode, criterion });
    }

    pub fn push_unresolved(&mut self, code: impl Into<String>, version: impl Into<String>) {
        self.unresolved.push(UnresolvedPin { code: code.into(), version: version.into() });
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Planned descriptors in dispatch order
    pub fn descriptors(&self) -> impl Iterator<Item = &DriverDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    pub fn unresolved(&self) -> &[UnresolvedPin] {
        &self.unresolved
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is planned and nothing failed to resolve
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.unresolved.is_empty()
    }
}
