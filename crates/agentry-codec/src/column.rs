//! Encoding configuration records to and from their storage columns.
//!
//! The persistence layer hands a column over as `Option<&[u8]>`, where `None`
//! is SQL NULL, and takes back `Option<Vec<u8>>` to write. The rules:
//!
//! - A record in its zero state encodes to NULL, not to an all-default blob.
//! - NULL, a zero-length value, and the JSON literal `null` all decode to the
//!   zero record.
//! - Anything else that does not parse fails with `MalformedInput` carrying
//!   the raw bytes. Callers propagate it; a corrupt column is never papered
//!   over with a default.
//!
//! The connector column is `Option<ToolConnectorConfig>`: absence is NULL,
//! and a present connector always encodes to an object, even an empty one.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use agentry_contracts::{
    error::{ModelError, ModelResult},
    Document, LlmConfig, ParametersSchema, ToolConnectorConfig,
};

/// A value that round-trips through a single JSON storage column.
///
/// Implementations must satisfy `decode_column(encode_column(v)) == v` for
/// every value `encode_column` accepts.
pub trait ColumnCodec: Sized {
    /// Record name used in errors and log fields.
    const TARGET: &'static str;

    /// Encode for storage. `None` means write NULL.
    fn encode_column(&self) -> ModelResult<Option<Vec<u8>>>;

    /// Decode a column as read from storage. `None` is NULL.
    fn decode_column(raw: Option<&[u8]>) -> ModelResult<Self>;
}

impl ColumnCodec for LlmConfig {
    const TARGET: &'static str = "LlmConfig";

    fn encode_column(&self) -> ModelResult<Option<Vec<u8>>> {
        encode_unless_zero(Self::TARGET, self, self.is_zero())
    }

    fn decode_column(raw: Option<&[u8]>) -> ModelResult<Self> {
        decode_or_zero(Self::TARGET, raw)
    }
}

impl ColumnCodec for ParametersSchema {
    const TARGET: &'static str = "ParametersSchema";

    fn encode_column(&self) -> ModelResult<Option<Vec<u8>>> {
        encode_unless_zero(Self::TARGET, self, self.is_zero())
    }

    fn decode_column(raw: Option<&[u8]>) -> ModelResult<Self> {
        decode_or_zero(Self::TARGET, raw)
    }
}

impl ColumnCodec for Option<ToolConnectorConfig> {
    const TARGET: &'static str = "ToolConnectorConfig";

    fn encode_column(&self) -> ModelResult<Option<Vec<u8>>> {
        match self {
            None => Ok(None),
            Some(cfg) => encode_json(Self::TARGET, cfg).map(Some),
        }
    }

    fn decode_column(raw: Option<&[u8]>) -> ModelResult<Self> {
        match raw {
            None | Some([]) => Ok(None),
            Some(bytes) => parse(Self::TARGET, bytes),
        }
    }
}

/// The generic document column is never written as NULL: an empty document
/// encodes to `{}` so the next read always has something to decode.
impl ColumnCodec for Document {
    const TARGET: &'static str = "Document";

    fn encode_column(&self) -> ModelResult<Option<Vec<u8>>> {
        encode_json(Self::TARGET, self).map(Some)
    }

    fn decode_column(raw: Option<&[u8]>) -> ModelResult<Self> {
        decode_or_zero(Self::TARGET, raw)
    }
}

fn encode_unless_zero<T: Serialize>(
    target: &'static str,
    value: &T,
    is_zero: bool,
) -> ModelResult<Option<Vec<u8>>> {
    if is_zero {
        debug!(record = target, "zero-valued record; writing NULL");
        return Ok(None);
    }
    encode_json(target, value).map(Some)
}

fn encode_json<T: Serialize>(target: &'static str, value: &T) -> ModelResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| ModelError::EncodeFailed {
        target,
        reason: e.to_string(),
    })
}

fn decode_or_zero<T: DeserializeOwned + Default>(
    target: &'static str,
    raw: Option<&[u8]>,
) -> ModelResult<T> {
    match raw {
        None => {
            debug!(record = target, "column is NULL; using zero value");
            Ok(T::default())
        }
        Some([]) => {
            debug!(record = target, "column is empty; using zero value");
            Ok(T::default())
        }
        Some(bytes) => Ok(parse::<Option<T>>(target, bytes)?.unwrap_or_default()),
    }
}

fn parse<T: DeserializeOwned>(target: &'static str, bytes: &[u8]) -> ModelResult<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        warn!(record = target, len = bytes.len(), error = %e, "malformed column");
        ModelError::malformed(target, e, bytes)
    })
}
