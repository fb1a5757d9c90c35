//! Model providers and the LLM entries users configure on top of them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agentry_codec::ColumnCodec;
use agentry_contracts::{error::ModelResult, LlmConfig};

use crate::base::RecordMeta;

/// Well-known provider identifiers.
pub const PROVIDER_OLLAMA: &str = "ollama";
pub const PROVIDER_OPENAI: &str = "openai";
pub const PROVIDER_QWEN: &str = "qwen";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmStatus {
    #[default]
    Active,
    Inactive,
}

/// What a model is used for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmType {
    #[default]
    Chat,
    Embedding,
    Vision,
}

/// A vendor account: where to send requests and with which key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub user_id: Uuid,
    pub name: String,
    /// One of the `PROVIDER_*` identifiers, or a custom one.
    pub provider: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_base: String,
    #[serde(default)]
    pub status: LlmStatus,
}

impl ProviderConfig {
    pub fn new(user_id: Uuid, name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            meta: RecordMeta::new(),
            user_id,
            name: name.into(),
            provider: provider.into(),
            description: String::new(),
            api_key: String::new(),
            api_base: String::new(),
            status: LlmStatus::Active,
        }
    }
}

/// A user-defined model entry bound to a provider account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Llm {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub provider_config_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_config: Option<ProviderConfig>,
    /// The vendor's model identifier, e.g. `gpt-4o`.
    pub model_name: String,
    #[serde(default)]
    pub model_type: LlmType,
    /// Stored in the `config` column; NULL when every field is zero.
    #[serde(default)]
    pub config: LlmConfig,
    #[serde(default)]
    pub status: LlmStatus,
}

impl Llm {
    pub fn new(provider: &ProviderConfig, name: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            meta: RecordMeta::new(),
            user_id: provider.user_id,
            name: name.into(),
            description: String::new(),
            provider_config_id: provider.meta.id,
            provider_config: None,
            model_name: model_name.into(),
            model_type: LlmType::Chat,
            config: LlmConfig::default(),
            status: LlmStatus::Active,
        }
    }

    pub fn config_column(&self) -> ModelResult<Option<Vec<u8>>> {
        self.config.encode_column()
    }

    /// Replace `config` with the decoded column. On error `self` is unchanged.
    pub fn load_config_column(&mut self, raw: Option<&[u8]>) -> ModelResult<()> {
        self.config = LlmConfig::decode_column(raw)?;
        Ok(())
    }
}
