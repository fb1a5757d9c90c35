//! Agents and their tool links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agentry_codec::{CoercionWarning, ColumnCodec, FromDocument};
use agentry_contracts::{error::ModelResult, Document, GenerationParams};

use crate::base::RecordMeta;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentVisibility {
    #[default]
    Private,
    Public,
    LinkOnly,
}

/// A configured assistant: prompt, model choice, and sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub creator_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Icon URL or path.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub model_provider: String,
    #[serde(default)]
    pub model_name: String,
    /// Raw sampling parameters as the front-end sent them. Read through
    /// [`Agent::generation_params`].
    #[serde(default)]
    pub model_parameters: Document,
    #[serde(default)]
    pub opening_dialogue: String,
    #[serde(default)]
    pub suggested_questions: Document,
    pub version: u32,
    #[serde(default)]
    pub status: AgentStatus,
    #[serde(default)]
    pub visibility: AgentVisibility,
    #[serde(default)]
    pub invocation_count: u64,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_ids: Vec<Uuid>,
}

impl Agent {
    /// A new private agent at version 1 with nothing configured.
    pub fn new(
        creator_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        status: AgentStatus,
    ) -> Self {
        Self {
            meta: RecordMeta::new(),
            creator_id,
            name: name.into(),
            description: description.into(),
            icon: String::new(),
            system_prompt: String::new(),
            model_provider: String::new(),
            model_name: String::new(),
            model_parameters: Document::new(),
            opening_dialogue: String::new(),
            suggested_questions: Document::new(),
            version: 1,
            status,
            visibility: AgentVisibility::Private,
            invocation_count: 0,
            published_at: None,
            tool_ids: Vec::new(),
        }
    }

    /// Sampling parameters coerced from `model_parameters`. Never fails.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::from_document(&self.model_parameters)
    }

    /// Like [`Agent::generation_params`], also naming every ignored field.
    pub fn generation_params_with_warnings(&self) -> (GenerationParams, Vec<CoercionWarning>) {
        GenerationParams::from_document_with_warnings(&self.model_parameters)
    }

    pub fn publish(&mut self) {
        self.status = AgentStatus::Published;
        self.published_at = Some(Utc::now());
        self.meta.touch();
    }

    pub fn archive(&mut self) {
        self.status = AgentStatus::Archived;
        self.meta.touch();
    }

    pub fn record_invocation(&mut self) {
        self.invocation_count = self.invocation_count.saturating_add(1);
    }

    /// Encoded `(model_parameters, suggested_questions)` columns.
    pub fn document_columns(&self) -> ModelResult<(Option<Vec<u8>>, Option<Vec<u8>>)> {
        Ok((
            self.model_parameters.encode_column()?,
            self.suggested_questions.encode_column()?,
        ))
    }

    /// Replace both document columns from storage. Either column failing to
    /// decode leaves `self` unchanged.
    pub fn load_document_columns(
        &mut self,
        model_parameters: Option<&[u8]>,
        suggested_questions: Option<&[u8]>,
    ) -> ModelResult<()> {
        let params = Document::decode_column(model_parameters)?;
        let questions = Document::decode_column(suggested_questions)?;
        self.model_parameters = params;
        self.suggested_questions = questions;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolLinkStatus {
    #[default]
    Active,
    Enabled,
    Disabled,
}

/// One row of the agent ⇄ tool link table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTool {
    pub agent_id: Uuid,
    pub tool_id: Uuid,
    #[serde(default)]
    pub status: ToolLinkStatus,
    pub created_at: DateTime<Utc>,
}

impl AgentTool {
    pub fn link(agent_id: Uuid, tool_id: Uuid) -> Self {
        Self {
            agent_id,
            tool_id,
            status: ToolLinkStatus::Active,
            created_at: Utc::now(),
        }
    }
}
