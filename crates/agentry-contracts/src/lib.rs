//! # agentry-contracts
//!
//! Shared configuration records, the generic document type, and the error
//! type for the agentry model crates.
//!
//! Nothing in this crate touches storage. The column codec lives in
//! `agentry-codec`; the entities that own these columns live in
//! `agentry-entities`.

pub mod config;
pub mod document;
pub mod error;
pub mod schema;

pub use config::{GenerationParams, LlmConfig, ToolConnectorConfig};
pub use document::Document;
pub use error::{ModelError, ModelResult};
pub use schema::{DataType, ParameterInfo, ParametersSchema};
