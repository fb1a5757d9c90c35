//! # agentry-plans
//!
//! Subscription plan quotas, loaded from a TOML catalog.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use agentry_plans::PlanCatalog;
//!
//! let catalog = PlanCatalog::from_file(Path::new("config/plans.toml"))?;
//! let quota = catalog.limits(user.current_plan);
//! ```
//!
//! Plans and fields the file leaves out keep their built-in values, so an
//! empty file yields [`PlanCatalog::builtin`].

pub mod catalog;
pub mod file;

pub use catalog::{builtin_limits, PlanCatalog};
pub use file::{CatalogFile, PlanLimits};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use agentry_contracts::error::ModelError;
    use agentry_entities::{PlanConfig, SubscriptionPlan};

    use crate::{builtin_limits, PlanCatalog};

    // ── 1. empty catalog ──────────────────────────────────────────────────────

    #[test]
    fn test_empty_catalog_is_builtin() {
        let catalog = PlanCatalog::from_toml_str("").unwrap();
        assert_eq!(catalog, PlanCatalog::builtin());
        assert_eq!(catalog.iter().count(), 4);
    }

    // ── 2. full override ──────────────────────────────────────────────────────

    #[test]
    fn test_plan_override() {
        let toml = r#"
            [plans.pro]
            max_agents = 75
            max_workflows = 30
            max_knowledge_base_size = 1024
        "#;

        let catalog = PlanCatalog::from_toml_str(toml).unwrap();
        assert_eq!(
            catalog.limits(SubscriptionPlan::Pro),
            PlanConfig {
                max_agents: 75,
                max_workflows: 30,
                max_knowledge_base_size: 1024,
            }
        );
        assert_eq!(
            catalog.limits(SubscriptionPlan::Free),
            builtin_limits(SubscriptionPlan::Free)
        );
    }

    // ── 3. partial override keeps built-in fields ─────────────────────────────

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [plans.free]
            max_agents = 5
        "#;

        let free = PlanCatalog::from_toml_str(toml)
            .unwrap()
            .limits(SubscriptionPlan::Free);
        let builtin = builtin_limits(SubscriptionPlan::Free);
        assert_eq!(free.max_agents, 5);
        assert_eq!(free.max_workflows, builtin.max_workflows);
        assert_eq!(free.max_knowledge_base_size, builtin.max_knowledge_base_size);
    }

    // ── 4. unknown plan ───────────────────────────────────────────────────────

    #[test]
    fn test_unknown_plan_is_config_error() {
        let toml = r#"
            [plans.platinum]
            max_agents = 1
        "#;

        match PlanCatalog::from_toml_str(toml) {
            Err(ModelError::ConfigError { reason }) => {
                assert!(reason.contains("platinum"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 5. unknown field ──────────────────────────────────────────────────────

    #[test]
    fn test_unknown_field_is_config_error() {
        let toml = r#"
            [plans.basic]
            max_agentz = 1
        "#;

        assert!(matches!(
            PlanCatalog::from_toml_str(toml),
            Err(ModelError::ConfigError { .. })
        ));
    }

    // ── 6. TOML parse error ───────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        match PlanCatalog::from_toml_str("this is not valid toml ][[[") {
            Err(ModelError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse plan catalog TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 7. missing file ───────────────────────────────────────────────────────

    #[test]
    fn test_missing_file() {
        let result = PlanCatalog::from_file(Path::new("/nonexistent/agentry/plans.toml"));
        match result {
            Err(ModelError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read plan catalog"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 8. shipped catalog ────────────────────────────────────────────────────

    #[test]
    fn test_shipped_catalog_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/plans.toml");
        let catalog = PlanCatalog::from_file(&path).unwrap();

        let basic = catalog.limits(SubscriptionPlan::Basic);
        assert_eq!(basic.max_agents, 10);
        assert_eq!(
            basic.max_knowledge_base_size,
            builtin_limits(SubscriptionPlan::Basic).max_knowledge_base_size
        );
        assert_eq!(catalog.limits(SubscriptionPlan::Enterprise).max_agents, 1000);
    }

    // ── 9. built-in ordering ──────────────────────────────────────────────────

    #[test]
    fn test_builtin_quotas_grow_with_plan() {
        let catalog = PlanCatalog::builtin();
        let agents: Vec<i64> = catalog.iter().map(|(_, cfg)| cfg.max_agents).collect();
        assert!(agents.windows(2).all(|w| w[0] < w[1]), "quotas: {agents:?}");
    }
}
