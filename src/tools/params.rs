//! Tool parameters: typed definitions, argument validation, JSON schema.

use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

// =============================================================================
// Parameter types
// =============================================================================

/// Parameter type for tool inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    String,
    Int,
    Float,
    Bool,
    StringList,
    Enum(Vec<String>),
    /// Free-form JSON object (DAG run `conf`, connection extras).
    Object,
    /// RFC 3339 timestamp string.
    DateTime,
    Optional(Box<ParamType>),
}

impl ParamType {
    pub fn optional(inner: ParamType) -> Self {
        ParamType::Optional(Box::new(inner))
    }

    pub fn enumeration(variants: &[&str]) -> Self {
        ParamType::Enum(variants.iter().map(|v| v.to_string()).collect())
    }

    /// JSON kind this type travels as, used in schemas and error messages.
    fn kind(&self) -> &'static str {
        match self {
            ParamType::String | ParamType::Enum(_) | ParamType::DateTime => "string",
            ParamType::Int => "integer",
            ParamType::Float => "number",
            ParamType::Bool => "boolean",
            ParamType::StringList => "array",
            ParamType::Object => "object",
            ParamType::Optional(inner) => inner.kind(),
        }
    }

    fn has_kind(&self, value: &Value) -> bool {
        match self.kind() {
            "string" => value.is_string(),
            "integer" => value.is_i64() || value.is_u64(),
            "number" => value.is_number(),
            "boolean" => value.is_boolean(),
            "array" => value.is_array(),
            _ => value.is_object(),
        }
    }

    /// Validate a JSON value against this parameter type.
    ///
    /// The JSON kind is checked first; enums, timestamps and string lists
    /// then check their contents.
    pub fn validate(&self, value: &Value) -> std::result::Result<(), String> {
        if let ParamType::Optional(inner) = self {
            return match value {
                Value::Null => Ok(()),
                _ => inner.validate(value),
            };
        }
        if !self.has_kind(value) {
            return Err(format!("expected {}, got {}", self.kind(), json_kind(value)));
        }

        match (self, value) {
            (ParamType::Enum(variants), Value::String(s)) if !variants.contains(s) => Err(format!(
                "invalid enum value '{}', expected one of: {}",
                s,
                variants.join(", ")
            )),
            (ParamType::DateTime, Value::String(s)) => chrono::DateTime::parse_from_rfc3339(s)
                .map(|_| ())
                .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", s, e)),
            (ParamType::StringList, Value::Array(items)) => {
                match items.iter().enumerate().find(|(_, item)| !item.is_string()) {
                    Some((i, item)) => Err(format!(
                        "expected string at index {}, got {}",
                        i,
                        json_kind(item)
                    )),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    /// JSON schema fragment for this type.
    pub fn json_schema(&self) -> Value {
        match self {
            ParamType::StringList => json!({ "type": "array", "items": { "type": "string" } }),
            ParamType::Enum(variants) => json!({ "type": "string", "enum": variants }),
            ParamType::DateTime => json!({ "type": "string", "format": "date-time" }),
            ParamType::Optional(inner) => inner.json_schema(),
            scalar => json!({ "type": scalar.kind() }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Parameter definition
// =============================================================================

/// Where a parameter goes in the outgoing HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    Path,
    #[default]
    Query,
    Body,
}

/// A single parameter definition for a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDef {
    pub name: String,
    pub param_type: ParamType,
    pub description: String,
    #[serde(default)]
    pub location: ParamLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamDef {
    pub fn new(
        name: impl Into<String>,
        param_type: ParamType,
        location: ParamLocation,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: description.into(),
            location,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none() && !matches!(self.param_type, ParamType::Optional(_))
    }
}

// =============================================================================
// Argument handling
// =============================================================================

/// Check tool arguments against parameter definitions.
///
/// Returns every problem found; an empty list means the arguments are valid.
/// Fails outright only when `args` is not a JSON object.
pub fn validate_args(params: &[ParamDef], args: &Value) -> Result<Vec<String>> {
    let supplied = args
        .as_object()
        .ok_or_else(|| Error::validation("Arguments must be a JSON object"))?;

    let missing = params
        .iter()
        .filter(|p| p.is_required() && !supplied.contains_key(&p.name))
        .map(|p| format!("Missing required parameter: {}", p.name));

    let invalid = supplied.iter().filter_map(|(key, value)| {
        match params.iter().find(|p| p.name == *key) {
            None => Some(format!("Unknown parameter: {}", key)),
            Some(param) => param
                .param_type
                .validate(value)
                .err()
                .map(|e| format!("Parameter '{}': {}", key, e)),
        }
    });

    Ok(missing.chain(invalid).collect())
}

/// Insert defaults for parameters the caller left out.
pub fn fill_defaults(params: &[ParamDef], args: &mut Value) {
    let Some(supplied) = args.as_object_mut() else {
        return;
    };
    for (name, default) in params
        .iter()
        .filter_map(|p| p.default.as_ref().map(|d| (&p.name, d)))
    {
        supplied
            .entry(name.clone())
            .or_insert_with(|| default.clone());
    }
}

/// Build the `inputSchema` object advertised to MCP clients.
pub fn input_schema(params: &[ParamDef]) -> Map<String, Value> {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in params {
        let mut schema = param.param_type.json_schema();
        if let Some(obj) = schema.as_object_mut() {
            obj.insert("description".to_string(), Value::String(param.description.clone()));
            if let Some(default) = &param.default {
                obj.insert("default".to_string(), default.clone());
            }
        }
        properties.insert(param.name.clone(), schema);
        if param.is_required() {
            required.push(Value::String(param.name.clone()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }
    schema
}

// =============================================================================
// Tests
// =============================================================================
