//! Plan catalog lookup.
//!
//! `PlanCatalog` resolves each `SubscriptionPlan` to its quotas. It starts
//! from the built-in table and applies whatever a TOML catalog overrides.
//! Checking a user's usage against these quotas is the caller's job.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use agentry_contracts::error::{ModelError, ModelResult};
use agentry_entities::{PlanConfig, SubscriptionPlan};

use crate::file::CatalogFile;

const MIB: i64 = 1024 * 1024;
const GIB: i64 = 1024 * MIB;

/// Quotas for `plan` when no catalog overrides them.
pub fn builtin_limits(plan: SubscriptionPlan) -> PlanConfig {
    let (max_agents, max_workflows, max_knowledge_base_size) = match plan {
        SubscriptionPlan::Free => (3, 1, 100 * MIB),
        SubscriptionPlan::Basic => (10, 5, GIB),
        SubscriptionPlan::Pro => (50, 20, 10 * GIB),
        SubscriptionPlan::Enterprise => (1_000, 200, 100 * GIB),
    };
    PlanConfig {
        max_agents,
        max_workflows,
        max_knowledge_base_size,
    }
}

/// Quotas for every subscription plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    limits: BTreeMap<SubscriptionPlan, PlanConfig>,
}

impl PlanCatalog {
    /// The built-in quotas, with nothing overridden.
    pub fn builtin() -> Self {
        Self {
            limits: SubscriptionPlan::ALL
                .into_iter()
                .map(|plan| (plan, builtin_limits(plan)))
                .collect(),
        }
    }

    /// Parse `s` as a TOML catalog and apply it over the built-in quotas.
    ///
    /// Returns `ModelError::ConfigError` if the TOML is malformed, names an
    /// unknown plan, or carries an unknown field.
    pub fn from_toml_str(s: &str) -> ModelResult<Self> {
        let file: CatalogFile = toml::from_str(s).map_err(|e| ModelError::ConfigError {
            reason: format!("failed to parse plan catalog TOML: {}", e),
        })?;

        let mut catalog = Self::builtin();
        for (name, overrides) in &file.plans {
            let plan = SubscriptionPlan::parse(name).ok_or_else(|| ModelError::ConfigError {
                reason: format!("unknown subscription plan '{}' in catalog", name),
            })?;
            let resolved = overrides.apply(builtin_limits(plan));
            debug!(plan = %plan, ?resolved, "plan limits loaded");
            catalog.limits.insert(plan, resolved);
        }

        for plan in SubscriptionPlan::ALL {
            if !file.plans.contains_key(plan.as_str()) {
                warn!(plan = %plan, "plan missing from catalog; using built-in limits");
            }
        }

        Ok(catalog)
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> ModelResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ModelError::ConfigError {
            reason: format!("failed to read plan catalog '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn limits(&self, plan: SubscriptionPlan) -> PlanConfig {
        self.limits
            .get(&plan)
            .copied()
            .unwrap_or_else(|| builtin_limits(plan))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubscriptionPlan, PlanConfig)> + '_ {
        self.limits.iter().map(|(plan, cfg)| (*plan, *cfg))
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
