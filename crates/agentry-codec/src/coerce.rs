//! Best-effort extraction of typed records from a generic [`Document`].
//!
//! Documents arriving from storage or from a front-end may be partial, carry
//! legacy keys, or hold a field with the wrong JSON type. Coercion never
//! fails: each recognised key is extracted on its own, a missing key or a
//! JSON `null` leaves the field at zero, and a value of the wrong type is
//! skipped. Unknown keys are ignored.
//!
//! Skipped fields are not logged. Callers that want to know about them use
//! [`FromDocument::from_document_with_warnings`].

use std::fmt;

use serde_json::Value;

use agentry_contracts::{Document, GenerationParams, LlmConfig, ToolConnectorConfig};

/// A recognised key whose value was skipped during coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionWarning {
    pub key: &'static str,
    /// The shape the field accepts.
    pub expected: &'static str,
    /// The JSON type that was actually present.
    pub found: &'static str,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ignored '{}': expected {}, found {}",
            self.key, self.expected, self.found
        )
    }
}

/// A record that can be coerced out of a [`Document`].
pub trait FromDocument: Sized {
    /// Coerce `doc`, reporting every skipped field.
    fn from_document_with_warnings(doc: &Document) -> (Self, Vec<CoercionWarning>);

    /// Coerce `doc`, discarding warnings.
    fn from_document(doc: &Document) -> Self {
        Self::from_document_with_warnings(doc).0
    }
}

impl FromDocument for GenerationParams {
    fn from_document_with_warnings(doc: &Document) -> (Self, Vec<CoercionWarning>) {
        let mut x = Extractor::new(doc);
        let params = GenerationParams {
            max_tokens: x.count("maxTokens"),
            temperature: x.float("temperature"),
            top_p: x.float("topP"),
            n: x.count("n"),
            stop: x.sequence("stop"),
            presence_penalty: x.float("presencePenalty"),
            frequency_penalty: x.float("frequencyPenalty"),
        };
        (params, x.warnings)
    }
}

impl FromDocument for LlmConfig {
    fn from_document_with_warnings(doc: &Document) -> (Self, Vec<CoercionWarning>) {
        let mut x = Extractor::new(doc);
        let cfg = LlmConfig {
            max_tokens: x.count("maxTokens"),
            temperature: x.float("temperature"),
            top_p: x.float("topP"),
        };
        (cfg, x.warnings)
    }
}

impl FromDocument for ToolConnectorConfig {
    fn from_document_with_warnings(doc: &Document) -> (Self, Vec<CoercionWarning>) {
        let mut x = Extractor::new(doc);
        let cfg = ToolConnectorConfig {
            transport: x.text("type"),
            url: x.text("url"),
            authentication_required: x.flag("authenticationRequired"),
            credential_type: x.text("credentialType"),
        };
        (cfg, x.warnings)
    }
}

/// Per-field try-cast-or-default over one document.
struct Extractor<'a> {
    doc: &'a Document,
    warnings: Vec<CoercionWarning>,
}

impl<'a> Extractor<'a> {
    fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            warnings: Vec::new(),
        }
    }

    fn extract<T: Default>(
        &mut self,
        key: &'static str,
        expected: &'static str,
        cast: impl FnOnce(&Value) -> Option<T>,
    ) -> T {
        let doc = self.doc;
        let value = match doc.get(key) {
            None | Some(Value::Null) => return T::default(),
            Some(value) => value,
        };
        cast(value).unwrap_or_else(|| {
            self.warnings.push(CoercionWarning {
                key,
                expected,
                found: json_type(value),
            });
            T::default()
        })
    }

    fn float(&mut self, key: &'static str) -> f64 {
        self.extract(key, "a number", Value::as_f64)
    }

    fn count(&mut self, key: &'static str) -> u32 {
        self.extract(key, "a non-negative integer", as_count)
    }

    fn text(&mut self, key: &'static str) -> String {
        self.extract(key, "a string", |v| v.as_str().map(str::to_string))
    }

    fn flag(&mut self, key: &'static str) -> bool {
        self.extract(key, "a boolean", Value::as_bool)
    }

    // A lone string is a one-element sequence. Elements are not validated.
    fn sequence(&mut self, key: &'static str) -> Vec<Value> {
        self.extract(key, "an array or a string", |v| match v {
            Value::Array(items) => Some(items.clone()),
            Value::String(_) => Some(vec![v.clone()]),
            _ => None,
        })
    }
}

/// Narrow any JSON number to a `u32`, truncating fractions toward zero.
fn as_count(value: &Value) -> Option<u32> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return u32::try_from(u).ok();
    }
    let f = n.as_f64()?;
    if f.is_finite() && f >= 0.0 && f < f64::from(u32::MAX) + 1.0 {
        Some(f.trunc() as u32)
    } else {
        None
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
