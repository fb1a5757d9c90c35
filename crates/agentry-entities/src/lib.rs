//! # agentry-entities
//!
//! The records the platform persists: agents, tools, LLM entries, provider
//! accounts, users, and subscription plans.
//!
//! These are plain data. The only behaviour beyond constructors is reading
//! and writing the JSON configuration columns each entity owns, which is
//! delegated to `agentry-codec`.

pub mod agent;
pub mod base;
pub mod llm;
pub mod subscription;
pub mod tool;
pub mod user;

pub use agent::{Agent, AgentStatus, AgentTool, AgentVisibility, ToolLinkStatus};
pub use base::RecordMeta;
pub use llm::{Llm, LlmStatus, LlmType, ProviderConfig};
pub use subscription::{PaymentDuration, PaymentMethod, PlanConfig, SubscriptionPlan};
pub use tool::{Tool, ToolType};
pub use user::{User, UserDto, UserStatus};

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use agentry_contracts::{
        DataType, Document, LlmConfig, ModelError, ParameterInfo, ToolConnectorConfig,
    };

    use super::*;

    // ── Agent ────────────────────────────────────────────────────────────────

    #[test]
    fn new_agent_has_defaults() {
        let agent = Agent::new(Uuid::new_v4(), "helper", "answers questions", AgentStatus::Draft);
        assert_eq!(agent.version, 1);
        assert_eq!(agent.visibility, AgentVisibility::Private);
        assert_eq!(agent.invocation_count, 0);
        assert!(agent.model_parameters.is_empty());
        assert!(agent.published_at.is_none());
        assert!(agent.generation_params().is_zero());
    }

    #[test]
    fn agent_generation_params_come_from_document() {
        let mut agent = Agent::new(Uuid::new_v4(), "a", "", AgentStatus::Draft);
        agent.model_parameters.insert("temperature", 0.2);
        agent.model_parameters.insert("stop", "END");
        agent.model_parameters.insert("n", "two");

        let (params, warnings) = agent.generation_params_with_warnings();
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.stop, vec![json!("END")]);
        assert_eq!(params.n, 0);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "n");
    }

    #[test]
    fn agent_document_columns_round_trip() {
        let mut agent = Agent::new(Uuid::new_v4(), "a", "", AgentStatus::Draft);
        agent.model_parameters.insert("maxTokens", 300);

        let (params, questions) = agent.document_columns().unwrap();
        assert_eq!(questions.as_deref(), Some(&b"{}"[..]));

        let mut loaded = Agent::new(agent.creator_id, "a", "", AgentStatus::Draft);
        loaded
            .load_document_columns(params.as_deref(), questions.as_deref())
            .unwrap();
        assert_eq!(loaded.model_parameters, agent.model_parameters);
        assert!(loaded.suggested_questions.is_empty());
    }

    #[test]
    fn agent_load_rejects_malformed_and_keeps_state() {
        let mut agent = Agent::new(Uuid::new_v4(), "a", "", AgentStatus::Draft);
        agent.model_parameters.insert("topP", 0.5);

        let err = agent
            .load_document_columns(None, Some(&b"{oops"[..]))
            .unwrap_err();
        assert!(matches!(err, ModelError::MalformedInput { .. }));
        assert_eq!(agent.model_parameters.get("topP"), Some(&json!(0.5)));
    }

    #[test]
    fn agent_publish_and_archive() {
        let mut agent = Agent::new(Uuid::new_v4(), "a", "", AgentStatus::Draft);
        agent.publish();
        assert_eq!(agent.status, AgentStatus::Published);
        assert!(agent.published_at.is_some());

        agent.archive();
        assert_eq!(agent.status, AgentStatus::Archived);

        agent.record_invocation();
        agent.record_invocation();
        assert_eq!(agent.invocation_count, 2);
    }

    #[test]
    fn agent_wire_shape_is_camel_case_and_flat() {
        let agent = Agent::new(Uuid::new_v4(), "a", "", AgentStatus::Draft);
        let value = serde_json::to_value(&agent).unwrap();
        assert!(value.get("id").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("deletedAt").is_none());
        assert_eq!(value["modelParameters"], json!({}));
        assert_eq!(value["visibility"], "private");
        assert_eq!(value["status"], "draft");

        let back: Agent = serde_json::from_value(value).unwrap();
        assert_eq!(back, agent);
    }

    #[test]
    fn visibility_link_only_is_snake_case() {
        assert_eq!(serde_json::to_value(AgentVisibility::LinkOnly).unwrap(), "link_only");
    }

    #[test]
    fn agent_tool_link_defaults_to_active() {
        let link = AgentTool::link(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(link.status, ToolLinkStatus::Active);
    }

    // ── Tool ─────────────────────────────────────────────────────────────────

    #[test]
    fn system_tool_columns_are_null_when_unconfigured() {
        let tool = Tool::new(Uuid::new_v4(), "clock", ToolType::System);
        assert!(!tool.requires_connector());
        assert_eq!(tool.parameters_schema_column().unwrap(), None);
        assert_eq!(tool.mcp_config_column().unwrap(), None);
    }

    #[test]
    fn mcp_tool_columns_round_trip() {
        let mut tool = Tool::mcp(
            Uuid::new_v4(),
            "search",
            ToolConnectorConfig::sse("https://mcp.example.com/sse"),
        );
        tool.parameters_schema
            .insert("q", ParameterInfo::new(DataType::String).required());
        assert!(tool.requires_connector());

        let schema = tool.parameters_schema_column().unwrap();
        let connector = tool.mcp_config_column().unwrap();

        let mut loaded = Tool::new(tool.creator_id, "search", ToolType::Mcp);
        loaded
            .load_columns(schema.as_deref(), connector.as_deref())
            .unwrap();
        assert_eq!(loaded.parameters_schema, tool.parameters_schema);
        assert_eq!(loaded.mcp_config, tool.mcp_config);
    }

    #[test]
    fn tool_defaults_to_enabled_when_field_missing() {
        let tool: Tool = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
            "creatorId": Uuid::new_v4(),
            "name": "t",
            "toolType": "system"
        }))
        .unwrap();
        assert!(tool.is_enable);
        assert!(tool.mcp_config.is_none());
    }

    // ── LLM ──────────────────────────────────────────────────────────────────

    #[test]
    fn llm_config_column_null_on_zero() {
        let provider = ProviderConfig::new(Uuid::new_v4(), "main", llm::PROVIDER_OPENAI);
        let mut model = Llm::new(&provider, "fast", "gpt-4o-mini");
        assert_eq!(model.provider_config_id, provider.meta.id);
        assert_eq!(model.model_type, LlmType::Chat);
        assert_eq!(model.config_column().unwrap(), None);

        model.config = LlmConfig {
            max_tokens: 2048,
            temperature: 0.3,
            top_p: 0.0,
        };
        let stored = model.config_column().unwrap();
        assert!(stored.is_some());

        let mut reloaded = Llm::new(&provider, "fast", "gpt-4o-mini");
        reloaded.load_config_column(stored.as_deref()).unwrap();
        assert_eq!(reloaded.config, model.config);
    }

    #[test]
    fn llm_load_keeps_config_on_error() {
        let provider = ProviderConfig::new(Uuid::new_v4(), "local", llm::PROVIDER_OLLAMA);
        let mut model = Llm::new(&provider, "m", "llama3");
        model.config.max_tokens = 10;
        assert!(model.load_config_column(Some(&br#"{"topP":"x"}"#[..])).is_err());
        assert_eq!(model.config.max_tokens, 10);
    }

    // ── RecordMeta ───────────────────────────────────────────────────────────

    #[test]
    fn soft_delete_marks_record() {
        let mut meta = RecordMeta::new();
        assert!(!meta.is_deleted());
        meta.soft_delete();
        assert!(meta.is_deleted());
        assert!(meta.updated_at >= meta.created_at);
    }

    // ── User ─────────────────────────────────────────────────────────────────

    #[test]
    fn user_status_serializes_as_code() {
        assert_eq!(serde_json::to_value(UserStatus::Disabled).unwrap(), json!(2));
        let status: UserStatus = serde_json::from_value(json!(1)).unwrap();
        assert_eq!(status, UserStatus::Normal);
        assert!(serde_json::from_value::<UserStatus>(json!(9)).is_err());
    }

    #[test]
    fn new_user_is_pending_until_verified() {
        let mut user = User::new("ada", "ada@example.com");
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(user.current_plan, SubscriptionPlan::Free);

        user.verify_email();
        assert!(user.email_verified);
        assert_eq!(user.status, UserStatus::Normal);
    }

    #[test]
    fn user_dto_has_role_and_no_password() {
        let mut user = User::new("ada", "ada@example.com");
        user.password = "$argon2id$hash".to_string();

        let dto = serde_json::to_value(user.to_dto("admin")).unwrap();
        assert_eq!(dto["role"], "admin");
        assert!(dto.get("password").is_none());
        assert_eq!(dto["currentPlan"], "free");
        assert_eq!(dto["status"], 3);
    }

    // ── Subscription ─────────────────────────────────────────────────────────

    #[test]
    fn plan_names_round_trip() {
        for plan in SubscriptionPlan::ALL {
            assert_eq!(SubscriptionPlan::parse(plan.as_str()), Some(plan));
            assert_eq!(serde_json::to_value(plan).unwrap(), plan.as_str());
        }
        assert_eq!(SubscriptionPlan::parse("platinum"), None);
    }

    #[test]
    fn payment_wire_names() {
        assert_eq!(serde_json::to_value(PaymentDuration::Quarterly).unwrap(), "quarter");
        assert_eq!(PaymentDuration::Yearly.months(), 12);
        assert_eq!(serde_json::to_value(PaymentMethod::WeChatPay).unwrap(), "wechat");
    }

    #[test]
    fn document_column_of_unknown_agent_is_empty() {
        let mut agent = Agent::new(Uuid::new_v4(), "a", "", AgentStatus::Draft);
        agent.load_document_columns(None, None).unwrap();
        assert_eq!(agent.model_parameters, Document::new());
    }
}
