//! Error types shared by the agentry model crates.
//!
//! Every fallible operation returns `ModelResult<T>`. Decode failures keep the
//! offending bytes so a corrupt column can be diagnosed from the error alone.

use thiserror::Error;

/// How many bytes of a malformed column are echoed in the error message.
const PREVIEW_LEN: usize = 64;

/// The unified error type for the agentry crates.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A stored column could not be parsed into its target type.
    ///
    /// Malformed storage content is a data-integrity problem: callers get this
    /// error unchanged and must not retry or substitute a default.
    #[error("malformed {target} column: {reason} (input: {})", preview(.bytes))]
    MalformedInput {
        /// Name of the record the bytes were decoded into.
        target: &'static str,
        /// The parser's explanation.
        reason: String,
        /// The raw column content as read from storage.
        bytes: Vec<u8>,
    },

    /// A record could not be serialized for storage.
    #[error("failed to encode {target}: {reason}")]
    EncodeFailed { target: &'static str, reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl ModelError {
    /// Build a `MalformedInput` for `target` from any displayable parse error.
    pub fn malformed(target: &'static str, reason: impl std::fmt::Display, bytes: &[u8]) -> Self {
        Self::MalformedInput {
            target,
            reason: reason.to_string(),
            bytes: bytes.to_vec(),
        }
    }
}

/// Convenience alias used throughout the agentry crates.
pub type ModelResult<T> = Result<T, ModelError>;

fn preview(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(&bytes[..bytes.len().min(PREVIEW_LEN)]);
    if bytes.len() > PREVIEW_LEN {
        format!("{text}… ({} bytes)", bytes.len())
    } else {
        text.into_owned()
    }
}
