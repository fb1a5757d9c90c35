//! Tool parameter descriptors.
//!
//! A tool's `parametersSchema` column maps each parameter name to a
//! [`ParameterInfo`]. The persisted key spellings (`Type`, `Desc`, …) are the
//! ones existing rows were written with; camelCase spellings are accepted on
//! read so hand-written documents decode too.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The JSON type a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Object,
    Number,
    Integer,
    String,
    Array,
    Null,
    Boolean,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Object => "object",
            DataType::Number => "number",
            DataType::Integer => "integer",
            DataType::String => "string",
            DataType::Array => "array",
            DataType::Null => "null",
            DataType::Boolean => "boolean",
        }
    }
}

/// Describes one tool parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    #[serde(rename = "Type", alias = "type")]
    pub kind: DataType,

    /// Element descriptor, for `array` parameters.
    #[serde(
        rename = "ElemInfo",
        alias = "elemInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub elem_info: Option<Box<ParameterInfo>>,

    /// Nested fields, for `object` parameters.
    #[serde(
        rename = "SubParams",
        alias = "subParams",
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "descriptor_map"
    )]
    pub sub_params: BTreeMap<String, ParameterInfo>,

    #[serde(rename = "Desc", alias = "desc", default, skip_serializing_if = "String::is_empty")]
    pub desc: String,

    /// Allowed values, for string parameters restricted to a fixed set.
    #[serde(
        rename = "Enum",
        alias = "enum",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub allowed: Vec<String>,

    #[serde(rename = "Required", alias = "required", default)]
    pub required: bool,
}

impl ParameterInfo {
    pub fn new(kind: DataType) -> Self {
        Self {
            kind,
            elem_info: None,
            sub_params: BTreeMap::new(),
            desc: String::new(),
            allowed: Vec::new(),
            required: false,
        }
    }

    pub fn describe(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_items(mut self, elem: ParameterInfo) -> Self {
        self.elem_info = Some(Box::new(elem));
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, info: ParameterInfo) -> Self {
        self.sub_params.insert(name.into(), info);
        self
    }

    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }

    /// Render this descriptor as a JSON Schema fragment.
    pub fn to_json_schema(&self) -> Value {
        let mut out = Map::new();
        out.insert("type".into(), json!(self.kind.as_str()));
        if !self.desc.is_empty() {
            out.insert("description".into(), json!(self.desc));
        }
        if !self.allowed.is_empty() {
            out.insert("enum".into(), json!(self.allowed));
        }
        if let Some(elem) = &self.elem_info {
            out.insert("items".into(), elem.to_json_schema());
        }
        if !self.sub_params.is_empty() {
            let (properties, required) = object_members(&self.sub_params);
            out.insert("properties".into(), Value::Object(properties));
            if !required.is_empty() {
                out.insert("required".into(), json!(required));
            }
        }
        Value::Object(out)
    }
}

/// The full parameter set of a tool, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParametersSchema(BTreeMap<String, ParameterInfo>);

impl<'de> Deserialize<'de> for ParametersSchema {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        descriptor_map(deserializer).map(Self)
    }
}

impl ParametersSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the parameter `name`.
    pub fn insert(&mut self, name: impl Into<String>, info: ParameterInfo) -> Option<ParameterInfo> {
        self.0.insert(name.into(), info)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterInfo> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParameterInfo)> {
        self.0.iter()
    }

    /// Names of required parameters, sorted.
    pub fn required_names(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, info)| info.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Render the whole parameter set as a JSON Schema object document, the
    /// shape model providers expect for function arguments.
    pub fn to_json_schema(&self) -> Value {
        let (properties, required) = object_members(&self.0);
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

impl<K: Into<String>> FromIterator<(K, ParameterInfo)> for ParametersSchema {
    fn from_iter<I: IntoIterator<Item = (K, ParameterInfo)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn object_members(fields: &BTreeMap<String, ParameterInfo>) -> (Map<String, Value>, Vec<String>) {
    let properties = fields
        .iter()
        .map(|(name, info)| (name.clone(), info.to_json_schema()))
        .collect();
    let required = fields
        .iter()
        .filter(|(_, info)| info.required)
        .map(|(name, _)| name.clone())
        .collect();
    (properties, required)
}

// Rows written by older writers carry `null` for empty maps and lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Older writers also stored a missing descriptor as a `null` map entry.
// Those entries are dropped.
fn descriptor_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, ParameterInfo>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries: BTreeMap<String, Option<ParameterInfo>> = null_as_default(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|(name, info)| info.map(|info| (name, info)))
        .collect())
}
