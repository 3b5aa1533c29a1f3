use std::sync::Arc;

use log::{debug, info, warn};

use crate::descriptor::{DescriptorCodec, DriverDescriptor, JsonDescriptorCodec};
use crate::kernel::constants;
use crate::loading::directive::{LoadCriterion, LoadDirective};
use crate::loading::error::LoadError;
use crate::loading::plan::{InstallMode, LoadPlan};
use crate::loading::version::VersionResolver;
use crate::registry::DescriptorStore;

/// Turns load directives into ordered install plans.
#[derive(Debug, Clone)]
pub struct LoadPlanner {
    store: Arc<dyn DescriptorStore>,
    codec: Arc<dyn DescriptorCodec>,
    resolver: VersionResolver,
    key_pattern: String,
}

impl LoadPlanner {
    /// Planner over `store` using the JSON codec, lexical versions and the
    /// default key pattern.
    pub fn new(store: Arc<dyn DescriptorStore>) -> Self {
        Self {
            store,
            codec: Arc::new(JsonDescriptorCodec::new()),
            resolver: VersionResolver::default(),
            key_pattern: constants::DEFAULT_KEY_PATTERN.to_string(),
        }
    }

    pub fn with_codec(mut self, codec: Arc<dyn DescriptorCodec>) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_resolver(mut self, resolver: VersionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_key_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.key_pattern = pattern.into();
        self
    }

    pub fn key_pattern(&self) -> &str {
        &self.key_pattern
    }

    pub fn resolver(&self) -> &VersionResolver {
        &self.resolver
    }

    /// Parse and plan a raw directive string.
    pub async fn plan(&self, directive: &str) -> Result<LoadPlan, LoadError> {
        self.plan_directive(&LoadDirective::parse(directive)).await
    }

    /// Plan an already parsed directive.
    ///
    /// An empty directive returns an empty plan without touching the store.
    /// A descriptor that fails to decode aborts planning; a pin with no
    /// matching descriptor is recorded in the plan and planning continues.
    pub async fn plan_directive(&self, directive: &LoadDirective) -> Result<LoadPlan, LoadError> {
        let mut plan = LoadPlan::new();
        if directive.is_empty() {
            debug!("Empty load directive, nothing to plan");
            return Ok(plan);
        }

        let registered = self.fetch_all().await?;
        debug!("Planning '{}' against {} registered descriptors", directive, registered.len());

        for criterion in directive.criteria() {
            match criterion {
                LoadCriterion::All => {
                    for descriptor in self.resolver.resolve_max(registered.iter().cloned()).into_values() {
                        plan.push(descriptor, InstallMode::Guarded, criterion.clone());
                    }
                }
                LoadCriterion::CodeOnly(code) => {
                    let matching = registered.iter().filter(|d| d.code_contains(code)).cloned();
                    let resolved = self.resolver.resolve_max(matching);
                    if resolved.is_empty() {
                        warn!("No registered driver matches code '{}'", code);
                    }
                    for descriptor in resolved.into_values() {
                        plan.push(descriptor, InstallMode::Guarded, criterion.clone());
                    }
                }
                LoadCriterion::CodeAndVersion { code, version } => {
                    let pinned = registered
                        .iter()
                        .find(|d| d.code_contains(code) && d.driver_version == *version);
                    match pinned {
                        Some(descriptor) => plan.push(descriptor.clone(), InstallMode::Pinned, criterion.clone()),
                        None => {
                            warn!("No registered driver matches pin '{}'", criterion);
                            plan.push_unresolved(code.clone(), version.clone());
                        }
                    }
                }
            }
        }

        info!(
            "Planned {} driver install(s) for '{}' ({} unresolved)",
            plan.len(),
            directive,
            plan.unresolved().len()
        );
        Ok(plan)
    }

    /// Read and decode every descriptor under keys matching the key pattern,
    /// ordered by key then field.
    pub async fn fetch_all(&self) -> Result<Vec<DriverDescriptor>, LoadError> {
        let keys = self.store.keys_matching(&self.key_pattern).await?;
        let mut descriptors = Vec::new();
        for key in keys {
            let fields = self.store.read_all_fields(&key).await?;
            for (field, bytes) in fields {
                let descriptor = self.codec.decode(&bytes).map_err(|source| LoadError::Decode {
                    key: key.clone(),
                    field,
                    source,
                })?;
                descriptors.push(descriptor);
            }
        }
        Ok(descriptors)
    }
}
