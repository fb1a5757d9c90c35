//! Typed configuration records stored in JSON columns.
//!
//! Each record knows whether it is in its zero state via `is_zero()`. The
//! column codec uses that predicate to write storage-null instead of an
//! all-default blob, so "never configured" and "configured with defaults"
//! read back the same.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transport marker for connectors reached over server-sent events.
pub const TRANSPORT_SSE: &str = "sse";

/// Runtime settings an LLM entry carries into every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LlmConfig {
    /// Upper bound on generated tokens, excluding the prompt.
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl LlmConfig {
    pub fn is_zero(&self) -> bool {
        self.max_tokens == 0 && self.temperature == 0.0 && self.top_p == 0.0
    }
}

/// Sampling parameters for a single agent.
///
/// Never stored as its own column: the agent's `modelParameters` document is
/// the source of truth and this record is coerced out of it on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParams {
    /// Maximum generated length in tokens. Prompt plus this must fit the
    /// model's context window.
    pub max_tokens: u32,
    /// 0.0 is near-deterministic; values above 1.0 trade accuracy for variety.
    pub temperature: f64,
    /// Nucleus sampling threshold.
    pub top_p: f64,
    /// Number of independent completions per prompt.
    pub n: u32,
    /// Stop sequences. Elements are expected to be strings but are kept
    /// untyped because upstream producers mix shapes.
    pub stop: Vec<Value>,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

impl GenerationParams {
    pub fn is_zero(&self) -> bool {
        self.max_tokens == 0
            && self.temperature == 0.0
            && self.top_p == 0.0
            && self.n == 0
            && self.stop.is_empty()
            && self.presence_penalty == 0.0
            && self.frequency_penalty == 0.0
    }

    /// The stop sequences that are actually strings, in order.
    pub fn stop_strings(&self) -> impl Iterator<Item = &str> {
        self.stop.iter().filter_map(Value::as_str)
    }
}

/// How a tool reaches its remote endpoint.
///
/// A tool without a remote endpoint has no connector at all, which is stored
/// as NULL and is distinct from a connector with every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolConnectorConfig {
    /// Transport kind, e.g. [`TRANSPORT_SSE`].
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub transport: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub authentication_required: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub credential_type: String,
}

impl ToolConnectorConfig {
    /// A connector for `url` using the SSE transport.
    pub fn sse(url: impl Into<String>) -> Self {
        Self {
            transport: TRANSPORT_SSE.to_string(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        self.transport.is_empty()
            && self.url.is_empty()
            && !self.authentication_required
            && self.credential_type.is_empty()
    }
}
