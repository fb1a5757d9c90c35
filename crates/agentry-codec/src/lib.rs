//! # agentry-codec
//!
//! Moves configuration records between their typed form and the JSON
//! columns they are stored in.
//!
//! Two independent entry points into the same records:
//!
//! - [`ColumnCodec`]: storage bytes ⇄ typed record, for trusted columns.
//!   Malformed bytes are an error.
//! - [`FromDocument`]: generic [`Document`](agentry_contracts::Document) →
//!   typed record, for partial, legacy or foreign input. Never fails.
//!
//! ```rust,ignore
//! use agentry_codec::{ColumnCodec, FromDocument};
//! use agentry_contracts::{Document, GenerationParams, LlmConfig};
//!
//! let cfg = LlmConfig::decode_column(row.config.as_deref())?;
//! let doc = Document::decode_column(row.model_parameters.as_deref())?;
//! let params = GenerationParams::from_document(&doc);
//! ```

pub mod coerce;
pub mod column;

pub use coerce::{CoercionWarning, FromDocument};
pub use column::ColumnCodec;

// ── Tests ─────────────────────────────────────────────────────────────────────
