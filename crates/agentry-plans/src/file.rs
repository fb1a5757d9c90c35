//! The on-disk shape of a plan catalog.
//!
//! ```toml
//! [plans.free]
//! max_agents = 3
//! max_workflows = 1
//! max_knowledge_base_size = 104857600
//!
//! [plans.pro]
//! max_agents = 50
//! ```
//!
//! Every field is optional. A field left out keeps the built-in value for
//! that plan, and a plan left out keeps all of its built-in values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use agentry_entities::PlanConfig;

/// Overrides for one plan. `None` keeps the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanLimits {
    pub max_agents: Option<i64>,
    pub max_workflows: Option<i64>,
    /// Bytes.
    pub max_knowledge_base_size: Option<i64>,
}

impl PlanLimits {
    /// Apply these overrides on top of `base`.
    pub fn apply(&self, base: PlanConfig) -> PlanConfig {
        PlanConfig {
            max_agents: self.max_agents.unwrap_or(base.max_agents),
            max_workflows: self.max_workflows.unwrap_or(base.max_workflows),
            max_knowledge_base_size: self
                .max_knowledge_base_size
                .unwrap_or(base.max_knowledge_base_size),
        }
    }
}

/// The top-level structure deserialized from a catalog file, keyed by plan
/// name (`free`, `basic`, `pro`, `enterprise`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub plans: BTreeMap<String, PlanLimits>,
}
