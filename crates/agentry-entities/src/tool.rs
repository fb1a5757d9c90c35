//! Tools agents can call.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agentry_codec::ColumnCodec;
use agentry_contracts::{error::ModelResult, ParametersSchema, ToolConnectorConfig};

use crate::base::RecordMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    /// Served by a remote MCP endpoint; needs a connector.
    Mcp,
    /// Built into the platform.
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub creator_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub tool_type: ToolType,
    #[serde(default = "enabled")]
    pub is_enable: bool,
    #[serde(default)]
    pub parameters_schema: ParametersSchema,
    /// `None` for tools without a remote endpoint.
    #[serde(default)]
    pub mcp_config: Option<ToolConnectorConfig>,
    /// Agents this tool is linked to through `agent_tools`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_ids: Vec<Uuid>,
}

fn enabled() -> bool {
    true
}

impl Tool {
    pub fn new(creator_id: Uuid, name: impl Into<String>, tool_type: ToolType) -> Self {
        Self {
            meta: RecordMeta::new(),
            creator_id,
            name: name.into(),
            description: String::new(),
            tool_type,
            is_enable: true,
            parameters_schema: ParametersSchema::new(),
            mcp_config: None,
            agent_ids: Vec::new(),
        }
    }

    /// An MCP tool reached through `connector`.
    pub fn mcp(creator_id: Uuid, name: impl Into<String>, connector: ToolConnectorConfig) -> Self {
        Self {
            mcp_config: Some(connector),
            ..Self::new(creator_id, name, ToolType::Mcp)
        }
    }

    pub fn requires_connector(&self) -> bool {
        self.tool_type == ToolType::Mcp
    }

    pub fn parameters_schema_column(&self) -> ModelResult<Option<Vec<u8>>> {
        self.parameters_schema.encode_column()
    }

    pub fn mcp_config_column(&self) -> ModelResult<Option<Vec<u8>>> {
        self.mcp_config.encode_column()
    }

    /// Replace both configuration columns from storage. Either column failing
    /// to decode leaves `self` unchanged.
    pub fn load_columns(
        &mut self,
        parameters_schema: Option<&[u8]>,
        mcp_config: Option<&[u8]>,
    ) -> ModelResult<()> {
        let schema = ParametersSchema::decode_column(parameters_schema)?;
        let connector = Option::<ToolConnectorConfig>::decode_column(mcp_config)?;
        self.parameters_schema = schema;
        self.mcp_config = connector;
        Ok(())
    }
}
